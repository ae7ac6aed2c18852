//! Command line surface of the `dotrank` binary.
//!
//! [`Cli`] is the raw clap surface, [`Options`] the validated configuration and [`run`] executes
//! one configuration against an output stream.

pub mod args;

use std::io::Write;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    algo::*,
    io::{DotGraph, DotRead, write_ranks, write_statistics},
    prelude::*,
};

pub use args::{Cli, DEFAULT_RESET_PERCENT, Options, UsageError};

/// Installs the stderr logger.
///
/// Uses `RUST_LOG` if set, otherwise `debug` when `verbose` and `warn` else.
pub fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

impl Options {
    /// RNG of the random surfer: seeded if requested, otherwise from the thread RNG
    fn rng(&self) -> Pcg64Mcg {
        match self.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }
}

/// Reads the graph and writes every requested report to `out`.
///
/// Reports are written in the order statistics, random surfer, power iteration.
/// Nothing is written if the graph cannot be read.
pub fn run<W: Write>(options: &Options, mut out: W) -> Result<()> {
    let dot: DotGraph = DotGraph::try_read_dot_file(&options.file)
        .with_context(|| format!("failed to read `{}`", options.file.display()))?;
    let graph = &dot.graph;
    let p = options.reset_probability;

    if options.statistics {
        write_statistics(&mut out, &dot.id, &graph.degree_statistics())?;
    }

    if let Some(steps) = options.random_surfer {
        let surfer = RandomSurfer::new().reset_probability(p).steps(steps);
        warn_if_skipped(graph, surfer.is_applicable(graph), "random surfer", p);

        let mut ranks = vec![0.0; graph.len()];
        surfer.rank_into(graph, &mut options.rng(), &mut ranks);
        write_ranks(&mut out, graph, &ranks)?;
    }

    if let Some(iterations) = options.power_iteration {
        let iteration = PowerIteration::new().damping(p).iterations(iterations);
        warn_if_skipped(graph, iteration.is_applicable(graph), "power iteration", p);

        let mut ranks = vec![0.0; graph.len()];
        iteration.rank_into(graph, &mut ranks);
        write_ranks(&mut out, graph, &ranks)?;
    }

    out.flush().context("failed to write output")?;
    debug!(file = %options.file.display(), "done");
    Ok(())
}

fn warn_if_skipped(graph: &MultiDigraph, applicable: bool, algorithm: &str, p: f64) {
    if !applicable && !graph.is_empty() {
        warn!(algorithm, p, "reset probability outside (0, 1], reporting zero ranks");
    }
}
