// Example: event_replay_demo.rs
// Replays every catalog event with a fixed seed and writes each one as CSV.
//
// Usage:
//     cargo run --example event_replay_demo -- [output_dir]

use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use vix_lib::models::replay::replay_event;
use vix_lib::simulation::export::write_replay_csv;
use vix_lib::historical_events;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::args().nth(1).unwrap_or_else(|| "replays".to_string()));
    fs::create_dir_all(&out_dir)?;

    let mut rng = StdRng::seed_from_u64(2008);

    for event in historical_events() {
        let replay = replay_event(&event, &mut rng)?;
        let profile = event.profile();

        println!("{} ({})", event.name, event.date);
        println!(
            "  {} -> {} -> {} | {}, {}",
            event.pre_vix, event.peak_vix, event.post_vix, profile.buildup, profile.normalization
        );
        if let Some((day, vix)) = replay.realized_peak() {
            println!("  {} points, replayed peak {:.1} on day {}", replay.len(), vix, day);
        }

        let file_name = event
            .name
            .to_lowercase()
            .replace(|c: char| !c.is_ascii_alphanumeric(), "_");
        let path = out_dir.join(format!("{}.csv", file_name));
        write_replay_csv(&replay, File::create(&path)?)?;
        println!("  written to {}\n", path.display());
    }

    Ok(())
}
