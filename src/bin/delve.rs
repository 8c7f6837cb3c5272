//! Generates a dungeon map and prints it, for eyeballing layouts.
//!
//! Usage: `delve [depth] [map key]`

use std::env;
use std::process;

use delve::{MapKey, ProceduralMapGenerator};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let depth: u32 = match args.next() {
        Some(arg) => match arg.parse() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("invalid depth: {}", arg);
                process::exit(1);
            },
        },
        None => 1,
    };
    let key: MapKey = match args.next() {
        Some(arg) => match arg.parse() {
            Ok(key) => key,
            Err(err) => {
                eprintln!("invalid map key: {}", err);
                process::exit(1);
            },
        },
        None => rand::random(),
    };

    let generator = ProceduralMapGenerator::default();
    match generator.generate_with_key(depth, key) {
        Ok(map) => {
            println!("Map Key: {}", key);
            println!("{} rooms at depth {}", map.nrooms(), map.depth());
            print!("{:?}", map);
        },
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        },
    }
}
