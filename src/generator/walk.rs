use std::collections::VecDeque;

use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::ProceduralMapGenerator;
use crate::map::{Direction, DungeonMap, GridPos};

/// An in-progress branch of the growth walk: a cell from which the walk may
/// still attach new rooms
struct WalkHead {
    pos: GridPos,
    /// How many rooms this branch has grown through, for diagnostics
    walk_depth: usize,
}

impl ProceduralMapGenerator {
    /// Grows the room graph by a randomized branching walk out from the grid
    /// center until the target room count is reached or every walk head has
    /// run into occupied/out-of-bounds cells.
    ///
    /// Each popped head places at most one room: the first cell found free
    /// while scanning the four directions in shuffled order. The new cell
    /// always becomes a head itself, and with `branch_chance` probability
    /// (capped at `max_branches` forks per build) a second head is queued at
    /// the same cell, forking the walk.
    pub(in super) fn grow_rooms(&self, rng: &mut StdRng, map: &mut DungeonMap, target: usize) {
        let center = GridPos {x: map.width() / 2, y: map.height() / 2};
        map.add_room(center);

        let mut heads = VecDeque::new();
        heads.push_back(WalkHead {pos: center, walk_depth: 0});
        let mut branches = 0;

        while map.nrooms() < target {
            let head = match heads.pop_front() {
                Some(head) => head,
                None => break,
            };
            let head_id = map.room_id_at(head.pos)
                .expect("bug: walk head positioned on an empty cell");

            let mut dirs = Direction::ALL;
            dirs.shuffle(rng);

            for &dir in &dirs {
                let next = match map.adjacent(head.pos, dir) {
                    Some(pos) if map.is_empty(pos) => pos,
                    // Out of bounds or already occupied: not an error, just
                    // a direction this head cannot grow in
                    _ => continue,
                };

                let new_id = map.add_room(next);
                map.connect(head_id, dir, new_id);
                trace!("walk placed room {} at ({}, {}) going {} (walk depth {})",
                    new_id, next.x, next.y, dir, head.walk_depth);

                heads.push_back(WalkHead {pos: next, walk_depth: head.walk_depth + 1});
                if branches < self.max_branches && rng.gen_bool(self.branch_chance) {
                    branches += 1;
                    heads.push_back(WalkHead {pos: next, walk_depth: head.walk_depth + 1});
                }

                // At most one new room per popped head
                break;
            }
        }
    }

    /// Tops the map up when the walk stalls below the target: scans all
    /// placed rooms in random order and attaches one new neighbour at the
    /// first room/direction pair with a free adjacent cell, over and over,
    /// until the target is reached or no free pair exists anywhere.
    ///
    /// Running out of free pairs is not an error; the map simply proceeds to
    /// type assignment with however many rooms it has.
    pub(in super) fn top_up_rooms(&self, rng: &mut StdRng, map: &mut DungeonMap, target: usize) {
        'top_up: while map.nrooms() < target {
            let mut ids: Vec<_> = map.room_ids().collect();
            ids.shuffle(rng);

            for id in ids {
                let pos = map.room(id).position();
                let mut dirs = Direction::ALL;
                dirs.shuffle(rng);

                for &dir in &dirs {
                    let next = match map.adjacent(pos, dir) {
                        Some(pos) if map.is_empty(pos) => pos,
                        _ => continue,
                    };

                    let new_id = map.add_room(next);
                    map.connect(id, dir, new_id);
                    trace!("top-up attached room {} at ({}, {})", new_id, next.x, next.y);
                    continue 'top_up;
                }
            }

            // No room anywhere has a free adjacent cell; stop growing early
            break;
        }
    }
}
