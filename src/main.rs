use battleship_solo::{
    init_logging, print_report, BattleError, GameConfig, GameSession, Strategy, DEFAULT_HEIGHT,
    DEFAULT_SHIP_GROUPS, DEFAULT_WIDTH,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Watch a scripted shooter sink a randomly placed fleet.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid width, clamped to 1..=26.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Grid height, clamped to 1..=26.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Number of classic five-ship groups (0 places a single carrier),
    /// clamped to 0..=100.
    #[arg(long, default_value_t = DEFAULT_SHIP_GROUPS)]
    ships: usize,
    /// Targeting strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    strategy: Strategy,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Print the game report as JSON instead of grids.
    #[arg(long)]
    json: bool,
    /// Log placement and targeting decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::new(cli.width, cli.height, cli.ships, cli.strategy);
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let session = match GameSession::setup(config, &mut rng) {
        Ok(session) => session,
        Err(e @ BattleError::PlacementTimeout { .. }) => {
            eprintln!("SETUP TIMEOUT: {}", e);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };
    let report = session.play(&mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
