//! park — the bumper-car park, end to end.
//!
//! Five riders share two bumper cars until ten rides have been given.  The
//! status board is printed to stdout; pass an output directory to also get
//! CSV snapshots and the full event journal.
//!
//! ```text
//! park [config.json] [output_dir]
//! ```
//!
//! `config.json` is a (possibly partial) `ParkConfig`; missing fields take
//! the defaults below.  Durations are `{"secs": s, "nanos": n}`.  Set
//! `RUST_LOG=debug` to follow every rider and car.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use bc_core::ParkConfig;
use bc_output::{CsvWriter, ParkOutputObserver, StatusPrinter};
use bc_pacing::RandomPacing;
use bc_park::{ParkBuilder, RunSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

// The classic park wanders for up to 20 s and bumps for up to 4 s; scaled
// down tenfold so a run finishes in seconds.
const RIDERS:          usize    = 5;
const CARS:            usize    = 2;
const RIDE_QUOTA:      u64      = 10;
const MAX_WANDER:      Duration = Duration::from_secs(2);
const MAX_BUMP:        Duration = Duration::from_millis(400);
const REPORT_INTERVAL: Duration = Duration::from_millis(500);
const SEED:            u64      = 42;

fn default_config() -> ParkConfig {
    ParkConfig {
        riders:          RIDERS,
        cars:            CARS,
        ride_quota:      RIDE_QUOTA,
        max_wander:      MAX_WANDER,
        max_bump:        MAX_BUMP,
        seed:            SEED,
        report_interval: Some(REPORT_INTERVAL),
        record_events:   false,
    }
}

fn load_config(path: &Path) -> Result<ParkConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn print_summary(summary: &RunSummary) {
    println!("Rides per car:");
    for (i, rides) in summary.rides_per_car.iter().enumerate() {
        println!("  Car {:<3} {rides}", i + 1);
    }
    println!("Rides per rider:");
    for (i, rides) in summary.rides_per_rider.iter().enumerate() {
        println!("  Rider {:<3} {rides}", i + 1);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => default_config(),
    };
    let output_dir = args.next();
    config.record_events |= output_dir.is_some();

    info!(
        "{} riders, {} cars, {} rides, seed {}",
        config.riders, config.cars, config.ride_quota, config.seed
    );

    let pacing = RandomPacing::from_config(&config);
    let park = ParkBuilder::new(config, pacing).build()?;

    let summary = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let writer = CsvWriter::new(Path::new(&dir))?;
            let mut obs = (StatusPrinter::stdout(), ParkOutputObserver::new(writer));
            let summary = park.run(&mut obs)?;
            if let Some(e) = obs.1.take_error() {
                eprintln!("output error: {e}");
            }
            info!("wrote output to {dir}");
            summary
        }
        None => park.run(&mut StatusPrinter::stdout())?,
    };

    print_summary(&summary);
    Ok(())
}
