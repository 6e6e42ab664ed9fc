use anyhow::{Context, Result};
use balanced_bst::demo::{self, DemoConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Builds a tree from random keys, unbalances it and rebalances it again.
#[derive(Parser, Debug)]
#[command(name = "balanced-bst", about = "Exercise a rebalancing binary search tree")]
struct Cli {
    /// How many random keys to draw.
    #[arg(long, default_value_t = 15)]
    count: usize,
    /// Random keys are drawn from 0 up to (but not including) this bound.
    #[arg(long, default_value_t = 100)]
    key_bound: u32,
    /// How many ascending keys to append above the bound to force imbalance.
    #[arg(long, default_value_t = 10)]
    extra: u32,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        Self {
            count: cli.count,
            key_bound: cli.key_bound,
            extra: cli.extra,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "balanced_bst=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from(Cli::parse());
    let report = demo::run(&config).context("failed to run the demo")?;

    println!("{}", report);
    Ok(())
}
