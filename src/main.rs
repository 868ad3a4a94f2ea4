use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ordtree::harness;
use ordtree::HarnessConfig;

/// Fills a binary search tree with random strings and prints it in order.
#[derive(Parser, Debug)]
#[command(name = "randomtree", version, about)]
struct Args {
    /// Number of strings inserted after the root
    #[arg(long, env = "RANDOMTREE_NODES", default_value_t = 50)]
    nodes: usize,

    /// Shortest string length (inclusive)
    #[arg(long, env = "RANDOMTREE_MIN_LENGTH", default_value_t = 10)]
    min_length: usize,

    /// Longest string length (exclusive)
    #[arg(long, env = "RANDOMTREE_MAX_LENGTH", default_value_t = 20)]
    max_length: usize,

    /// Seed for a reproducible run
    #[arg(long, env = "RANDOMTREE_SEED")]
    seed: Option<u64>,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl From<&Args> for HarnessConfig {
    fn from(args: &Args) -> Self {
        Self {
            nodes: args.nodes,
            min_length: args.min_length,
            max_length: args.max_length,
        }
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::debug!(?args, "starting");

    let stdout = io::stdout();
    if let Err(e) = harness::run(&HarnessConfig::from(&args), &mut rng, stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Stdout carries the tree, so logs go to stderr.
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
