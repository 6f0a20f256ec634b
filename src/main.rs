use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use mctree::tree::{Depth, DEFAULT_DEPTH, DEFAULT_MAX_CHILDREN, DEFAULT_WIN_RATE};
use mctree::{report, search, Node, TreeConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Trees to run the search on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Trees {
    /// The small fixed example tree.
    Example,
    /// A tree generated from `--depth`, `--win-rate` and `--max-children`.
    Random,
    /// The example tree first, then a random one.
    Both,
}

/// Builds trees, runs batches of random descents over them and prints the
/// success rate of every node after each batch.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Trees to search over.
    #[arg(long, value_enum, default_value_t = Trees::Both)]
    trees: Trees,
    /// Height of the random tree.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: Depth,
    /// Percentage threshold in [0, 100] for marking a new child as a winning
    /// leaf. Higher values produce fewer winners.
    #[arg(long, default_value_t = DEFAULT_WIN_RATE)]
    win_rate: u8,
    /// Maximum number of children of a node (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_CHILDREN)]
    max_children: usize,
    /// Seed of the random number generator. Drawn at random when not set.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of iterations in each batch over the example tree.
    #[arg(long, num_args = 1.., default_values_t = [1, 1])]
    example_batches: Vec<usize>,
    /// Number of iterations in each batch over the random tree.
    #[arg(long, num_args = 1.., default_values_t = [1, 5])]
    batches: Vec<usize>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Runs the batches over `root`, printing a titled block per batch.
fn run_batches(
    title: &str,
    mut root: Node,
    batches: &[usize],
    rng: &mut ChaCha8Rng,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::info!(title, nodes = root.size(), "tree is ready");
    writeln!(output, "{title}")?;
    let mut iterations = 0;
    for (batch, &size) in batches.iter().enumerate() {
        search::run_iterations(&mut root, size, rng);
        iterations += size;
        if batch > 0 {
            writeln!(output)?;
        }
        writeln!(output, "After {iterations} iterations")?;
        report::write_report(Some(&root), &mut *output)?;
        tracing::debug!(iterations, rates = %report::summary(Some(&root)), "batch done");
    }
    tracing::info!(title, iterations, root_rate = root.success_rate(), "done");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();
    mctree::log_build_info();

    let config = TreeConfig {
        depth: args.depth,
        win_rate: args.win_rate,
        max_children: args.max_children,
    };
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeding random number generator");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    if matches!(args.trees, Trees::Example | Trees::Both) {
        run_batches(
            "Example tree",
            Node::example(),
            &args.example_batches,
            &mut rng,
            &mut output,
        )?;
    }
    if args.trees == Trees::Both {
        writeln!(output)?;
    }
    if matches!(args.trees, Trees::Random | Trees::Both) {
        let root = config.build(&mut rng);
        run_batches("Random tree", root, &args.batches, &mut rng, &mut output)?;
    }
    Ok(())
}
