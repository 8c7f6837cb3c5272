use super::{Direction, GridPos, RoomId};

/// The category of a room. Carries no behaviour of its own: the combat,
/// event, and shop systems decide what actually happens when the player
/// enters a room of each type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    /// The room the player starts the dungeon run in. Exactly one per map.
    Start,
    /// The final room of the run. Stepping in triggers the boss encounter.
    /// Exactly one per map.
    Boss,
    /// A regular encounter room. Most rooms have this type and it is the
    /// provisional type of every room during map growth.
    Combat,
    /// A scripted event is triggered when this room is first entered
    Event,
    /// Contains loot and no enemies
    Treasure,
    /// Lets the player recover resources. Only generated at depth >= 2.
    Rest,
    /// Offers a blessing in exchange for a cost. Only generated at depth >= 3.
    Shrine,
    /// An in-dungeon shop. At most one per map, only at depth >= 2.
    Shop,
}

impl RoomType {
    /// A single-character symbol for this room type, used by the map's
    /// Debug rendering
    pub fn symbol(self) -> &'static str {
        use self::RoomType::*;
        match self {
            Start => "S",
            Boss => "B",
            Combat => "c",
            Event => "e",
            Treasure => "T",
            Rest => "r",
            Shrine => "+",
            Shop => "$",
        }
    }
}

/// A single room: one node in the dungeon graph.
///
/// Rooms link to each other through `RoomId` indexes into the arena owned by
/// the `DungeonMap`, never through direct references. A room has at most one
/// neighbour per direction. Each link is one-way: storing a link here says
/// nothing about whether the neighbour links back (see `DungeonMap::link`
/// and `DungeonMap::connect` for the two linking disciplines).
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pos: GridPos,
    rtype: RoomType,
    /// Indexed by `Direction::index`
    links: [Option<RoomId>; 4],
    visited: bool,
}

impl Room {
    /// Create a new room at the given position with the provisional Combat
    /// type and no links
    pub(in super) fn new(pos: GridPos) -> Self {
        Self {
            pos,
            rtype: RoomType::Combat,
            links: [None; 4],
            visited: false,
        }
    }

    /// The grid position of this room
    pub fn position(&self) -> GridPos {
        self.pos
    }

    pub fn room_type(&self) -> RoomType {
        self.rtype
    }

    /// Changes the type of this room. Only generators assign types; the
    /// type is read-only to everyone else once the map has been handed out.
    pub(crate) fn set_room_type(&mut self, rtype: RoomType) {
        self.rtype = rtype;
    }

    /// The room linked in the given direction, if any
    pub fn adjoining(&self, dir: Direction) -> Option<RoomId> {
        self.links[dir.index()]
    }

    /// The directions in which this room has a live link to a neighbour.
    /// These are the moves available to a player standing in this room.
    pub fn available_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.iter().cloned().filter(move |&dir| self.adjoining(dir).is_some())
    }

    /// Stores a one-way link to another room.
    ///
    /// Panics if this room already has a neighbour in that direction.
    pub(in super) fn connect(&mut self, dir: Direction, other: RoomId) {
        let link = &mut self.links[dir.index()];
        debug_assert!(link.is_none(),
            "bug: attempt to link a room in a direction that already has a neighbour");
        *link = Some(other);
    }

    /// Returns true if the player has entered this room at least once
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Records that the player has entered this room
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}
