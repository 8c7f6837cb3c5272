// The procedural generator is split across modules grouped by the phases of
// map generation: growing the room graph (walk) and assigning room types
// (room_types). The phase methods do not interact with one another; splitting
// them up keeps each file small while sharing the configuration via &self.
mod room_types;
mod simple;
mod walk;

pub use self::simple::*;

use std::error::Error;
use std::fmt;

use log::debug;
use rand::{random, rngs::StdRng, Rng, SeedableRng};

use crate::map::{DungeonMap, MapKey};

/// Represents when we have run out of attempts to generate a map
///
/// Every attempt re-runs the whole randomized build, so this only happens
/// when the generator is configured with a room minimum its grid cannot
/// satisfy. The caller owns any user-facing messaging for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RanOutOfAttempts;

impl fmt::Display for RanOutOfAttempts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ran out of attempts to generate a dungeon map")
    }
}

impl Error for RanOutOfAttempts {}

/// The side length of the (square) map grid for a dungeon of the given depth
///
/// A pure function of depth: no randomness is involved.
pub fn grid_size(depth: u32) -> usize {
    match depth {
        0..=1 => 5,
        2..=3 => 6,
        4..=5 => 7,
        _ => 8,
    }
}

/// The number of rooms the generator aims for at the given depth
///
/// Deeper dungeons fill more of their grid, capped at 75% of the usable
/// room range so generation stays tractable. A pure function of depth.
pub fn target_rooms(depth: u32) -> usize {
    let size = grid_size(depth);
    let min_rooms = 2 * size + 4;
    let max_rooms = size * size - 6;
    let factor = (0.5 + 0.06 * depth as f64).min(0.75);
    min_rooms + ((max_rooms - min_rooms) as f64 * factor) as usize
}

/// Builds dungeon maps by randomized branching growth: a walk that snakes
/// out from the grid center, forking occasionally, topped up greedily if it
/// stalls, with room types assigned by weighted quota afterwards.
#[derive(Debug, Clone)]
pub struct ProceduralMapGenerator {
    /// The number of full builds to attempt before giving up
    ///
    /// A build that produces fewer than `min_rooms` rooms is thrown away and
    /// redone from scratch with a reseeded rng. Without this cap a map that
    /// can never satisfy `min_rooms` would retry forever.
    pub attempts: usize,
    /// The fewest rooms an acceptable map may have
    pub min_rooms: usize,
    /// The probability that placing a room also forks the walk there
    pub branch_chance: f64,
    /// The most forks allowed over one whole build. Keeps the forking rule
    /// from flooding the queue with heads.
    pub max_branches: usize,
}

impl Default for ProceduralMapGenerator {
    fn default() -> Self {
        Self {
            attempts: 10,
            min_rooms: 12,
            branch_chance: 0.4,
            max_branches: 5,
        }
    }
}

impl ProceduralMapGenerator {
    /// Generates a map for the given depth from a random key
    pub fn generate(&self, depth: u32) -> Result<DungeonMap, RanOutOfAttempts> {
        let key = random();
        debug!("generating depth {} map with key {}", depth, key);
        self.generate_with_key(depth, key)
    }

    /// Generates a map for the given depth from the given key. The same key
    /// recreates the same map.
    pub fn generate_with_key(&self, depth: u32, key: MapKey) -> Result<DungeonMap, RanOutOfAttempts> {
        let mut rng = key.to_rng();

        for attempt in 1..=self.attempts {
            if let Some(map) = self.try_generate(&mut rng, depth) {
                return Ok(map);
            }
            debug!("discarding depth {} map with fewer than {} rooms (attempt {} of {})",
                depth, self.min_rooms, attempt, self.attempts);
            // Reseed the rng using itself
            rng = StdRng::from_seed(rng.gen());
        }

        Err(RanOutOfAttempts)
    }

    /// Runs one full randomized build. Returns None if the build came out
    /// under the room minimum and should be retried.
    fn try_generate(&self, rng: &mut StdRng, depth: u32) -> Option<DungeonMap> {
        let size = grid_size(depth);
        let target = target_rooms(depth);
        let mut map = DungeonMap::new(size, size, depth);

        self.grow_rooms(rng, &mut map, target);
        self.top_up_rooms(rng, &mut map, target);

        if map.nrooms() < self.min_rooms {
            return None;
        }

        self.assign_room_types(rng, &mut map, depth);
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use crate::map::{RoomId, RoomType};

    /// Walks the room graph from the start room and returns every room id
    /// reachable by following direction links
    fn reachable_from_start(map: &DungeonMap) -> HashSet<RoomId> {
        let mut seen = HashSet::new();
        let mut open = vec![map.start_room_id()];
        while let Some(id) = open.pop() {
            if !seen.insert(id) {
                continue;
            }
            for dir in map.room(id).available_directions() {
                let adj = map.room(id).adjoining(dir)
                    .expect("bug: available direction without a link");
                open.push(adj);
            }
        }
        seen
    }

    fn count_type(map: &DungeonMap, rtype: RoomType) -> usize {
        map.rooms().filter(|(_, room)| room.room_type() == rtype).count()
    }

    #[test]
    fn sizing_is_a_pure_function_of_depth() {
        for depth in 0..=12 {
            assert_eq!(grid_size(depth), grid_size(depth));
            assert_eq!(target_rooms(depth), target_rooms(depth));
        }

        assert_eq!(grid_size(1), 5);
        assert_eq!(grid_size(2), 6);
        assert_eq!(grid_size(3), 6);
        assert_eq!(grid_size(4), 7);
        assert_eq!(grid_size(5), 7);
        assert_eq!(grid_size(6), 8);
        assert_eq!(grid_size(100), 8);
    }

    #[test]
    fn target_rooms_stays_within_the_grid() {
        for depth in 1..=12 {
            let size = grid_size(depth);
            let target = target_rooms(depth);
            assert!(target >= 2 * size + 4, "depth {}: target {} below minimum", depth, target);
            assert!(target <= size * size - 6, "depth {}: target {} above maximum", depth, target);
        }

        // Spot checks: depth 1 caps the density factor at 0.56, depth 6 at 0.75
        assert_eq!(target_rooms(1), 16);
        assert_eq!(target_rooms(6), 48);
    }

    #[test]
    fn depth_1_maps_satisfy_all_structural_invariants() {
        let generator = ProceduralMapGenerator::default();
        for _ in 0..30 {
            let map = generator.generate(1).expect("depth 1 generation should not fail");

            assert_eq!(map.width(), 5);
            assert_eq!(map.height(), 5);
            assert!(map.nrooms() >= 12, "only {} rooms", map.nrooms());
            assert!(map.nrooms() <= 19, "{} rooms exceeds the sizing cap", map.nrooms());

            // Exactly one start and one boss, and they are different rooms
            assert_eq!(count_type(&map, RoomType::Start), 1);
            assert_eq!(count_type(&map, RoomType::Boss), 1);
            assert_ne!(map.start_room_id(), map.boss_room_id());

            // Depth 1 has no rest sites, shrines or shops
            assert_eq!(count_type(&map, RoomType::Rest), 0);
            assert_eq!(count_type(&map, RoomType::Shrine), 0);
            assert_eq!(count_type(&map, RoomType::Shop), 0);

            // But always gets its treasure and event minimums
            assert!(count_type(&map, RoomType::Treasure) >= 2);
            assert!(count_type(&map, RoomType::Event) >= 2);

            // Every room is reachable from the start room
            assert_eq!(reachable_from_start(&map).len(), map.nrooms());
        }
    }

    #[test]
    fn deep_maps_contain_the_depth_gated_rooms() {
        let generator = ProceduralMapGenerator::default();
        for _ in 0..30 {
            let map = generator.generate(6).expect("depth 6 generation should not fail");

            assert_eq!(map.width(), 8);
            assert!(map.nrooms() >= 12);
            assert!(map.nrooms() <= 58);

            assert!(count_type(&map, RoomType::Rest) >= 1);
            assert!(count_type(&map, RoomType::Shrine) >= 1);
            assert_eq!(count_type(&map, RoomType::Shop), 1);
            assert!(count_type(&map, RoomType::Treasure) >= 2);
            assert!(count_type(&map, RoomType::Event) >= 2);

            assert_eq!(reachable_from_start(&map).len(), map.nrooms());
        }
    }

    #[test]
    fn links_are_always_symmetric() {
        // The procedural generator only ever connects rooms both ways, so a
        // link from A to B must come with a link from B back to A in the
        // opposite direction. This is a design choice, not a given: the
        // linking primitives themselves are one-way.
        let generator = ProceduralMapGenerator::default();
        for depth in &[1, 3, 6] {
            let map = generator.generate(*depth).unwrap();
            for (id, room) in map.rooms() {
                for dir in room.available_directions() {
                    let other = room.adjoining(dir).unwrap();
                    assert_eq!(map.room(other).adjoining(dir.opposite()), Some(id),
                        "room {} links to {} via {} without a link back", id, other, dir);
                }
            }
        }
    }

    #[test]
    fn linked_rooms_are_grid_neighbours() {
        let generator = ProceduralMapGenerator::default();
        let map = generator.generate(4).unwrap();
        for (_, room) in map.rooms() {
            for dir in room.available_directions() {
                let other = map.room(room.adjoining(dir).unwrap());
                assert_eq!(other.position().difference(room.position()), dir.delta());
            }
        }
    }

    #[test]
    fn start_room_is_ready_for_the_player() {
        let generator = ProceduralMapGenerator::default();
        let map = generator.generate(2).unwrap();

        assert_eq!(map.start_room().room_type(), RoomType::Start);
        assert!(map.start_room().is_visited());
        assert_eq!(map.current_room_id(), map.start_room_id());

        // The start room is at the grid center and no other room is visited
        let center = map.width() / 2;
        assert_eq!(map.start_room().position(), crate::map::GridPos {x: center, y: center});
        let visited = map.rooms().filter(|(_, room)| room.is_visited()).count();
        assert_eq!(visited, 1);
    }

    #[test]
    fn anchors_are_the_first_and_last_rooms_grown() {
        let generator = ProceduralMapGenerator::default();
        let map = generator.generate(3).unwrap();

        assert_eq!(Some(map.start_room_id()), map.room_ids().next());
        assert_eq!(Some(map.boss_room_id()), map.room_ids().last());
    }

    #[test]
    fn same_key_recreates_the_same_map() {
        let generator = ProceduralMapGenerator::default();
        let key = rand::random();

        let a = generator.generate_with_key(5, key).unwrap();
        let b = generator.generate_with_key(5, key).unwrap();

        assert_eq!(a.nrooms(), b.nrooms());
        for (room_a, room_b) in a.rooms().zip(b.rooms()) {
            assert_eq!(room_a.1, room_b.1);
        }
        assert_eq!(a.start_room_id(), b.start_room_id());
        assert_eq!(a.boss_room_id(), b.boss_room_id());
    }

    #[test]
    fn unsatisfiable_minimum_runs_out_of_attempts() {
        // A 5x5 grid can never hold 1000 rooms, so every build is discarded
        // and the retry cap is what stops the generator.
        let generator = ProceduralMapGenerator {
            attempts: 3,
            min_rooms: 1000,
            ..ProceduralMapGenerator::default()
        };

        match generator.generate(1) {
            Err(RanOutOfAttempts) => {},
            Ok(map) => panic!("expected generation to fail, got a {}-room map", map.nrooms()),
        }
    }
}
