use rand::{rngs::StdRng, seq::SliceRandom};

use super::ProceduralMapGenerator;
use crate::map::{DungeonMap, RoomType};

impl ProceduralMapGenerator {
    /// Assigns final room types to a fully grown map.
    ///
    /// The first room grown becomes the start and the last becomes the boss
    /// (insertion order, not grid order). The rooms in between draw from a
    /// shuffled quota list whose counts scale with the room count and gate on
    /// depth; rooms left over once the list runs out keep their provisional
    /// Combat type. Ends by marking the start room visited and making it the
    /// player's current room.
    pub(in super) fn assign_room_types(&self, rng: &mut StdRng, map: &mut DungeonMap, depth: u32) {
        let start = map.room_ids().next()
            .expect("bug: type assignment on a map with no rooms");
        let boss = map.room_ids().last()
            .expect("bug: type assignment on a map with no rooms");
        debug_assert!(start != boss, "bug: type assignment on a single-room map");

        map.room_mut(start).set_room_type(RoomType::Start);
        map.set_start_room(start);
        map.room_mut(boss).set_room_type(RoomType::Boss);
        map.set_boss_room(boss);

        let mut quotas = self.type_quotas(map.nrooms(), depth);
        quotas.shuffle(rng);

        // Hand the shuffled quota list out front-to-back to the middle rooms
        // in insertion order. Any room the list does not cover stays Combat.
        let middle: Vec<_> = map.room_ids()
            .filter(|&id| id != start && id != boss)
            .collect();
        for (id, rtype) in middle.into_iter().zip(quotas) {
            map.room_mut(id).set_room_type(rtype);
        }

        map.room_mut(start).mark_visited();
        map.set_current_room(start);
    }

    /// The flat list of special room types owed to a map with `nrooms` rooms
    /// at the given depth, one entry per room to assign
    fn type_quotas(&self, nrooms: usize, depth: u32) -> Vec<RoomType> {
        let mut quotas = Vec::new();

        let mut push = |rtype, count| {
            for _ in 0..count {
                quotas.push(rtype);
            }
        };

        push(RoomType::Treasure, (nrooms / 6).max(2));
        push(RoomType::Event, (nrooms / 7).max(2));
        if depth >= 2 {
            push(RoomType::Rest, (nrooms / 10).max(1));
        }
        if depth >= 3 {
            push(RoomType::Shrine, (nrooms / 12).max(1));
        }
        if depth >= 2 {
            push(RoomType::Shop, 1);
        }

        quotas
    }
}
