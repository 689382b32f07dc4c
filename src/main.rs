use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rust_rps::games::shape_names;
use rust_rps::{run_match, GameResult, MatchConfig, StrategySpec, Variant};

/// Simulate rounds of rock, paper, scissors between two automated players.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON match config; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game variant: classic or lizard
    #[arg(long)]
    variant: Option<Variant>,

    /// Number of rounds to play [default: 100]
    #[arg(long, short)]
    rounds: Option<u32>,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Player A: a shape name, `random`, or a comma separated cycle [default: paper]
    #[arg(long)]
    player_a: Option<StrategySpec>,

    /// Player B: a shape name, `random`, or a comma separated cycle [default: random]
    #[arg(long)]
    player_b: Option<StrategySpec>,

    /// Print the result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Print the shape names of the chosen variant and exit
    #[arg(long)]
    list_shapes: bool,
}

impl Args {
    fn into_config(self) -> rust_rps::Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_json_file(path)?,
            None => MatchConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(player_a) = self.player_a {
            config.player_a = player_a;
        }
        if let Some(player_b) = self.player_b {
            config.player_b = player_b;
        }
        Ok(config)
    }
}

fn report(result: &GameResult) -> serde_json::Value {
    serde_json::json!({
        "rounds": result.rounds(),
        "player_a_wins": result.player_a_wins(),
        "player_b_wins": result.player_b_wins(),
        "draws": result.draws(),
        "player_a_win_rate": result.player_a_win_rate().as_f64(),
        "player_b_win_rate": result.player_b_win_rate().as_f64(),
        "draw_rate": result.draw_rate().as_f64(),
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let json = args.json;
    let list_shapes = args.list_shapes;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if list_shapes {
        for name in shape_names(config.variant) {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let outcome = run_match(&config);
    match outcome {
        Ok(result) => {
            if json {
                println!("{:#}", report(&result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
