use crate::map::{Direction, DungeonMap, GridPos, RoomType};

/// Builds a fixed, hand-authored 3x3 layout. No randomness and no failure
/// path, which makes it the known-good reference map for conformance tests
/// and a deterministic fallback if procedural generation is ever disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleMapGenerator;

impl SimpleMapGenerator {
    /// Generates the fixed layout for the given depth. Always succeeds.
    ///
    /// The layout leaves cell (0, 0) empty and places 8 rooms:
    ///
    /// ```text
    ///      c  e
    ///   c  S  c
    ///   T  c  B
    /// ```
    ///
    /// with the start in the center and the boss in the far corner.
    pub fn generate(&self, depth: u32) -> DungeonMap {
        let mut map = DungeonMap::new(3, 3, depth);

        let start = map.add_room(GridPos {x: 1, y: 1});
        let north = map.add_room(GridPos {x: 1, y: 0});
        let event = map.add_room(GridPos {x: 2, y: 0});
        let west = map.add_room(GridPos {x: 0, y: 1});
        let east = map.add_room(GridPos {x: 2, y: 1});
        let south = map.add_room(GridPos {x: 1, y: 2});
        let treasure = map.add_room(GridPos {x: 0, y: 2});
        let boss = map.add_room(GridPos {x: 2, y: 2});

        map.room_mut(start).set_room_type(RoomType::Start);
        map.room_mut(event).set_room_type(RoomType::Event);
        map.room_mut(treasure).set_room_type(RoomType::Treasure);
        map.room_mut(boss).set_room_type(RoomType::Boss);
        // north, west, east and south keep their default Combat type

        // Every link is authored one way at a time: linking the start east to
        // a room does NOT automatically link that room west to the start.
        // Each corridor below is therefore written as two explicit links.
        map.link(start, Direction::North, north);
        map.link(north, Direction::South, start);

        map.link(start, Direction::East, east);
        map.link(east, Direction::West, start);

        map.link(start, Direction::South, south);
        map.link(south, Direction::North, start);

        map.link(start, Direction::West, west);
        map.link(west, Direction::East, start);

        map.link(north, Direction::East, event);
        map.link(event, Direction::West, north);

        map.link(east, Direction::South, boss);
        map.link(boss, Direction::North, east);

        map.link(south, Direction::West, treasure);
        map.link(treasure, Direction::East, south);

        map.link(south, Direction::East, boss);
        map.link(boss, Direction::West, south);

        map.set_start_room(start);
        map.set_boss_room(boss);
        map.room_mut(start).mark_visited();
        map.set_current_room(start);

        map
    }
}
