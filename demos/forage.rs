//! Seeded end-to-end demo: a cat forages across a few areas, swallows what
//! it finds, and digests in strict FIFO order.
//!
//! Run with: cargo run --example forage

use bevy_prng::WyRand;
use forager::interp;
use forager::{Animal, Area};
use rand_core::{RngCore, SeedableRng};

fn main() {
    let mut rng = WyRand::from_seed(42u64.to_le_bytes());

    let mut jimbo = Animal::new(
        "Jimbo",
        "Cat",
        vec!["meat".into(), "cheese".into(), "grass".into()],
    );

    let areas = [
        area("meadow", &["grass", "trees", "grass"]),
        area("pantry", &["cheese", "baked beans", "meat"]),
        area("quarry", &["rocks", "gravel"]),
    ];

    const STOMACH_CAP: f64 = 6.0;
    let mut swallowed = 0.0;

    for turn in 0..5 {
        let pick = (rng.next_u64() % areas.len() as u64) as usize;
        let patch = &areas[pick];

        let found = match jimbo.find_food(patch) {
            Ok(found) => found,
            Err(err) => {
                println!("turn {turn}: {err}");
                continue;
            }
        };

        let terrain = patch.terrain.as_deref().unwrap_or("?");
        println!("turn {turn}: {} scours the {terrain}, finds {found:?}", jimbo.name());
        for item in found {
            jimbo.eat_food(item);
            swallowed += 1.0;
        }

        let fullness = interp::inverse_lerp_clamp(0.0, STOMACH_CAP, swallowed)
            .expect("numeric operands");
        println!("         fullness {:.0}%", fullness * 100.0);
    }

    print!("digesting:");
    while let Some(item) = jimbo.plop() {
        print!(" {item}");
    }
    println!();
}

fn area(terrain: &str, items: &[&str]) -> Area {
    Area {
        terrain: Some(terrain.to_string()),
        safe: true,
        items: Some(items.iter().map(|s| s.to_string()).collect()),
    }
}
