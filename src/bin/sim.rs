use battleship_solo::{init_logging, run_game, BattleError, GameConfig, Strategy};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use tokio::task::JoinSet;

/// Play batches of seeded games and compare strategies.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Games per strategy.
    #[arg(long, default_value_t = 100)]
    games: u64,
    #[arg(long, default_value_t = 10)]
    width: usize,
    #[arg(long, default_value_t = 10)]
    height: usize,
    #[arg(long, default_value_t = 1)]
    ships: usize,
    /// Only simulate this strategy; all of them when omitted.
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    /// Seed of the first game; game `i` uses `seed + i` for every strategy.
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

#[derive(Serialize)]
struct StrategyStats {
    strategy: Strategy,
    games: usize,
    timeouts: usize,
    mean_shots: f64,
    min_shots: Option<usize>,
    max_shots: Option<usize>,
}

impl StrategyStats {
    fn new(strategy: Strategy, outcomes: &[Option<usize>]) -> Self {
        let shots: Vec<usize> = outcomes.iter().flatten().copied().collect();
        let mean_shots = if shots.is_empty() {
            0.0
        } else {
            shots.iter().sum::<usize>() as f64 / shots.len() as f64
        };
        Self {
            strategy,
            games: outcomes.len(),
            timeouts: outcomes.len() - shots.len(),
            mean_shots,
            min_shots: shots.iter().min().copied(),
            max_shots: shots.iter().max().copied(),
        }
    }
}

/// Shots needed for one game, `None` when the fleet did not fit.
fn play_one(config: GameConfig, seed: u64) -> anyhow::Result<Option<usize>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    match run_game(config, &mut rng) {
        Ok(report) => Ok(Some(report.shots)),
        Err(BattleError::PlacementTimeout { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(false);

    let strategies = match args.strategy {
        Some(s) => vec![s],
        None => Strategy::ALL.to_vec(),
    };

    let base = GameConfig::new(args.width, args.height, args.ships, Strategy::default());
    let mut tasks = JoinSet::new();
    for (slot, &strategy) in strategies.iter().enumerate() {
        let config = GameConfig::new(base.width(), base.height(), base.multiplier(), strategy);
        for game in 0..args.games {
            let seed = args.seed.wrapping_add(game);
            tasks.spawn_blocking(move || (slot, play_one(config, seed)));
        }
    }

    let mut outcomes: Vec<Vec<Option<usize>>> = vec![Vec::new(); strategies.len()];
    while let Some(joined) = tasks.join_next().await {
        let (slot, outcome) = joined?;
        outcomes[slot].push(outcome?);
    }

    let results: Vec<StrategyStats> = strategies
        .iter()
        .zip(&outcomes)
        .map(|(&strategy, o)| StrategyStats::new(strategy, o))
        .collect();
    let summary = json!({
        "width": base.width(),
        "height": base.height(),
        "ships": base.multiplier(),
        "games": args.games,
        "results": results,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
