//! The dungeon map data model: a graph of rooms laid out on a 2D grid.
//!
//! The map owns every room in a flat arena and rooms refer to each other
//! through `RoomId` indexes into that arena. This keeps the room graph (which
//! is cyclic by design) free of ownership cycles and makes the whole map
//! cheap to clone and trivial to serialize if save/load is ever added.

mod direction;
mod grid_pos;
mod map_key;
mod room;

pub use self::direction::*;
pub use self::grid_pos::*;
pub use self::map_key::*;
pub use self::room::*;

use std::fmt;

/// Identifies a room within its `DungeonMap`. Only valid for the map that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated dungeon map: a grid of cells, each either empty or holding a
/// room, plus the start/boss anchors and the player's current-room cursor.
///
/// Constructed empty by a generator and populated cell by cell. After
/// generation the map is read-mostly: only the current-room cursor and the
/// rooms' visited flags change, driven by player navigation.
#[derive(Clone)]
pub struct DungeonMap {
    /// Every room of the map in insertion order. A `RoomId` is an index into
    /// this field.
    rooms: Vec<Room>,
    /// grid[y][x] is the room occupying that cell, if any
    grid: Vec<Vec<Option<RoomId>>>,
    /// The dungeon level this map belongs to
    depth: u32,
    start: Option<RoomId>,
    boss: Option<RoomId>,
    current: Option<RoomId>,
}

impl DungeonMap {
    /// Create a new map with the given grid bounds and no rooms
    pub(crate) fn new(width: usize, height: usize, depth: u32) -> Self {
        assert!(width > 0 && height > 0, "Cannot create a map with zero width or height");
        DungeonMap {
            rooms: Vec::new(),
            grid: vec![vec![None; width]; height],
            depth,
            start: None,
            boss: None,
            current: None,
        }
    }

    /// The number of cells along the x axis
    pub fn width(&self) -> usize {
        self.grid[0].len()
    }

    /// The number of cells along the y axis
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The number of rooms placed on the map
    pub fn nrooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// Iterates over every room and its id, in insertion order
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    /// Iterates over every room id, in insertion order
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> {
        (0..self.rooms.len()).map(RoomId)
    }

    /// The room occupying the given cell, if any
    pub fn room_at(&self, pos: GridPos) -> Option<&Room> {
        self.room_id_at(pos).map(move |id| self.room(id))
    }

    /// The id of the room occupying the given cell, if any
    pub fn room_id_at(&self, pos: GridPos) -> Option<RoomId> {
        self.grid[pos.y][pos.x]
    }

    /// Returns true if the given cell holds no room
    pub fn is_empty(&self, pos: GridPos) -> bool {
        self.grid[pos.y][pos.x].is_none()
    }

    /// The cell one step in the given direction, or None if that step would
    /// leave the grid
    pub fn adjacent(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        pos.step(dir, self.width(), self.height())
    }

    /// Places a new room at the given cell and returns its id
    ///
    /// Panics if the cell is already occupied
    pub(crate) fn add_room(&mut self, pos: GridPos) -> RoomId {
        let cell = &mut self.grid[pos.y][pos.x];
        // Should not be any other room here already
        debug_assert!(cell.is_none(),
            "bug: attempt to place a room on a cell where a room was already placed");

        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(pos));
        *cell = Some(id);
        id
    }

    /// Stores a one-way link: `from` gains `to` as its neighbour in the given
    /// direction. Nothing is recorded on `to`.
    pub(crate) fn link(&mut self, from: RoomId, dir: Direction, to: RoomId) {
        assert_ne!(from, to, "bug: attempt to link a room to itself");
        self.rooms[from.0].connect(dir, to);
    }

    /// Links two rooms both ways: a to b in the given direction and b back to
    /// a in the opposite direction
    pub(crate) fn connect(&mut self, a: RoomId, dir: Direction, b: RoomId) {
        self.link(a, dir, b);
        self.link(b, dir.opposite(), a);
    }

    /// The room the player starts the run in
    pub fn start_room(&self) -> &Room {
        self.room(self.start_room_id())
    }

    pub fn start_room_id(&self) -> RoomId {
        self.start.expect("bug: map queried for its start room before generation completed")
    }

    pub(crate) fn set_start_room(&mut self, id: RoomId) {
        self.start = Some(id);
    }

    /// The room holding the boss encounter
    pub fn boss_room(&self) -> &Room {
        self.room(self.boss_room_id())
    }

    pub fn boss_room_id(&self) -> RoomId {
        self.boss.expect("bug: map queried for its boss room before generation completed")
    }

    pub(crate) fn set_boss_room(&mut self, id: RoomId) {
        self.boss = Some(id);
    }

    /// The room the player is currently in
    pub fn current_room(&self) -> &Room {
        self.room(self.current_room_id())
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current.expect("bug: map queried for its current room before generation completed")
    }

    /// Moves the current-room cursor. Navigation logic uses this when it
    /// needs to place the player somewhere directly (e.g. the start room).
    pub fn set_current_room(&mut self, id: RoomId) {
        // Bounds-check the id now rather than on the next access
        let _ = &self.rooms[id.0];
        self.current = Some(id);
    }

    /// Follows the current room's link in the given direction, marking the
    /// destination visited and moving the cursor to it.
    ///
    /// Returns None (and moves nothing) if the current room has no neighbour
    /// in that direction.
    pub fn move_current(&mut self, dir: Direction) -> Option<RoomId> {
        let next = self.current_room().adjoining(dir)?;
        self.rooms[next.0].mark_visited();
        self.current = Some(next);
        Some(next)
    }
}

impl fmt::Debug for DungeonMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use colored::*;

        for y in 0..self.height() {
            for x in 0..self.width() {
                match self.room_at(GridPos {x, y}) {
                    None => write!(f, "{}", " ".on_black())?,
                    Some(room) => {
                        let symbol = room.room_type().symbol();
                        use self::RoomType::*;
                        write!(f, "{}", match room.room_type() {
                            Start => symbol.on_bright_blue(),
                            Boss => symbol.on_red(),
                            Combat => symbol.on_blue(),
                            Event => symbol.on_green(),
                            Treasure => symbol.on_yellow(),
                            Rest => symbol.on_cyan(),
                            Shrine => symbol.on_magenta(),
                            Shop => symbol.on_bright_yellow(),
                        })?;
                    },
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
