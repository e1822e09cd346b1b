//! Headless Ludo simulator.
//!
//! ```text
//! RUST_LOG=info ludo-sim --seed 7 --games 100 --policy greedy
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ludo_engine::play::{Autoplay, FirstLegal, GreedyPolicy, Policy, RandomPolicy};
use ludo_engine::{Engine, GameConfig, PlayerId, PlayerMap};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    First,
    Random,
    Greedy,
}

impl PolicyKind {
    fn build(self, seed: u64, player: PlayerId) -> Box<dyn Policy> {
        match self {
            PolicyKind::First => Box::new(FirstLegal),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed ^ u64::from(player.0))),
            PolicyKind::Greedy => Box::new(GreedyPolicy),
        }
    }
}

/// Play seeded headless Ludo games and print one summary line per game.
#[derive(Parser, Debug)]
#[command(name = "ludo-sim", version, about = "Play headless Ludo games")]
struct Cli {
    /// Base seed; game N uses seed + N
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Action cap per game
    #[arg(long, default_value_t = ludo_engine::play::DEFAULT_MAX_ACTIONS)]
    max_actions: u32,

    /// Policy used by every seat
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    policy: PolicyKind,

    /// JSON file with player names and colors
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    GameConfig::from_json(&text).with_context(|| format!("parsing config from {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let base = load_config(cli.config.as_ref())?;

    let mut wins: PlayerMap<u64> = PlayerMap::with_value(0);
    let mut unfinished = 0u64;

    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(game);
        let mut engine = Engine::new(base.clone().with_seed(seed))?;
        let mut autoplay = Autoplay::new(PlayerMap::new(|player| cli.policy.build(seed, player)))
            .with_max_actions(cli.max_actions);

        let summary = autoplay.run(&mut engine)?;
        println!("game={} seed={} {}", game, seed, summary);

        match summary.winner {
            Some(winner) => wins[winner] += 1,
            None => unfinished += 1,
        }
    }

    for (player, count) in wins.iter() {
        println!("{}: {} wins", base.players[player].name, count);
    }
    if unfinished > 0 {
        println!("unfinished: {}", unfinished);
    }
    Ok(())
}
