//! Procedural dungeon map generation for turn-based dungeon runs.
//!
//! A dungeon run takes place on a [`DungeonMap`]: a grid of cells, each
//! empty or holding one [`Room`], connected into a graph the player walks
//! room to room. Maps come from one of two generators:
//!
//! - [`ProceduralMapGenerator`] grows a randomized map sized by the run's
//!   depth, retrying internally until the map clears its room minimum.
//! - [`SimpleMapGenerator`] returns a fixed hand-authored 3x3 layout.
//!
//! Both hand back a map whose start room is already visited and current, so
//! navigation logic can immediately ask the current room for its
//! [`available directions`](Room::available_directions) and move the cursor
//! with [`DungeonMap::move_current`].
//!
//! ```rust
//! use delve::ProceduralMapGenerator;
//!
//! let map = ProceduralMapGenerator::default().generate(1)?;
//! assert!(map.nrooms() >= 12);
//! println!("{:?}", map);
//! # Ok::<(), delve::RanOutOfAttempts>(())
//! ```

#![deny(unused_must_use)]

mod generator;
mod map;

pub use crate::generator::*;
pub use crate::map::*;
