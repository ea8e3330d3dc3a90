#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use submarines::{cli, init_logging, Dimensions, FleetCatalog, GameSession, SessionConfig};

/// Two-player submarines on a three-level board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = submarines::DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = submarines::DEFAULT_COLUMNS)]
    columns: usize,
    #[arg(long, default_value_t = submarines::NUM_LEVELS)]
    levels: usize,
    #[arg(
        long,
        help = "Fleet as kind=count pairs (e.g., --fleet submarine=2,destroyer=1,jet=1,general=1)"
    )]
    fleet: Option<FleetCatalog>,
    #[arg(long, conflicts_with = "fleet", help = "JSON file mapping vessel kinds to counts")]
    fleet_file: Option<std::path::PathBuf>,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let fleet = match &args.fleet_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading fleet file {}", path.display()))?;
            FleetCatalog::from_json(&json)?
        }
        None => args.fleet.clone().unwrap_or_default(),
    };
    let dimensions = Dimensions::new(args.rows, args.columns, args.levels)?;
    let config = SessionConfig::new(dimensions, fleet);

    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
    }
    let mut rng = if let Some(s) = args.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = GameSession::new(&config, &mut rng)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli::run(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}
