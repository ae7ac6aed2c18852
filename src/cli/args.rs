use std::path::PathBuf;

use clap::{Parser, value_parser};
use thiserror::Error;

/// Default reset probability in percent
pub const DEFAULT_RESET_PERCENT: u32 = 10;

/// Command line arguments of `dotrank`. Repeating a flag overrides its earlier value.
#[derive(Debug, Parser)]
#[command(
    name = "dotrank",
    version,
    about = "Degree statistics and rank estimates for directed graphs in DOT notation",
    args_override_self = true
)]
pub struct Cli {
    /// Estimate ranks with a random surfer performing N steps
    #[arg(short = 'r', value_name = "N", value_parser = value_parser!(u64).range(1..))]
    pub random_surfer: Option<u64>,

    /// Compute ranks with N rounds of power iteration
    #[arg(short = 'm', value_name = "N", value_parser = value_parser!(u64).range(1..))]
    pub power_iteration: Option<u64>,

    /// Print degree statistics
    #[arg(short = 's')]
    pub statistics: bool,

    /// Reset (damping) probability in percent
    #[arg(
        short = 'p',
        value_name = "P",
        default_value_t = DEFAULT_RESET_PERCENT,
        value_parser = value_parser!(u32).range(1..)
    )]
    pub reset_percent: u32,

    /// Seed for the random surfer
    #[arg(long, value_name = "S")]
    pub seed: Option<u64>,

    /// Enable debug logging on stderr (`RUST_LOG` takes precedence)
    #[arg(long, short)]
    pub verbose: bool,

    /// Input graph, must end in `.dot`
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Violations of the command line contract that clap cannot detect on its own
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("at least one of -r, -m or -s is required")]
    NoMode,

    #[error("input file `{}` does not end in .dot", .0.display())]
    NotADotFile(PathBuf),

    #[error("input file `{}` does not exist", .0.display())]
    MissingFile(PathBuf),
}

/// Validated configuration of a single run
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub file: PathBuf,
    pub statistics: bool,
    pub random_surfer: Option<u64>,
    pub power_iteration: Option<u64>,
    pub reset_probability: f64,
    pub seed: Option<u64>,
}

impl TryFrom<Cli> for Options {
    type Error = UsageError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !cli.statistics && cli.random_surfer.is_none() && cli.power_iteration.is_none() {
            return Err(UsageError::NoMode);
        }

        if cli.file.extension().is_none_or(|ext| ext != "dot") {
            return Err(UsageError::NotADotFile(cli.file));
        }

        if !cli.file.exists() {
            return Err(UsageError::MissingFile(cli.file));
        }

        Ok(Self {
            file: cli.file,
            statistics: cli.statistics,
            random_surfer: cli.random_surfer,
            power_iteration: cli.power_iteration,
            reset_probability: f64::from(cli.reset_percent) / 100.0,
            seed: cli.seed,
        })
    }
}

#[cfg(test)]
mod test {
    use clap::{CommandFactory, error::ErrorKind};

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dotrank").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["-s", "graph.dot"]).unwrap();
        assert!(cli.statistics);
        assert_eq!(cli.random_surfer, None);
        assert_eq!(cli.power_iteration, None);
        assert_eq!(cli.reset_percent, DEFAULT_RESET_PERCENT);
        assert_eq!(cli.seed, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn modes_keep_their_own_step_counts() {
        let cli = parse(&["-r", "100", "-m", "7", "-p", "25", "graph.dot"]).unwrap();
        assert_eq!(cli.random_surfer, Some(100));
        assert_eq!(cli.power_iteration, Some(7));
        assert_eq!(cli.reset_percent, 25);
    }

    #[test]
    fn repeated_flags_override() {
        let cli = parse(&["-r", "1", "-r", "2", "-p", "5", "-p", "50", "x.dot"]).unwrap();
        assert_eq!(cli.random_surfer, Some(2));
        assert_eq!(cli.reset_percent, 50);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        for args in [
            &["-r", "0", "x.dot"][..],
            &["-m", "0", "x.dot"],
            &["-p", "0", "x.dot"],
            &["-p", "-5", "x.dot"],
            &["-r", "abc", "x.dot"],
        ] {
            assert!(parse(args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["-V"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn file_is_required() {
        assert!(parse(&["-s"]).is_err());
    }

    #[test]
    fn options_require_a_mode() {
        let cli = parse(&["graph.dot"]).unwrap();
        assert!(matches!(Options::try_from(cli), Err(UsageError::NoMode)));
    }

    #[test]
    fn options_require_dot_suffix() {
        for file in ["graph.txt", "graph", "graph.dot.bak", "graph.DOT"] {
            let cli = parse(&["-s", file]).unwrap();
            assert!(
                matches!(Options::try_from(cli), Err(UsageError::NotADotFile(_))),
                "{file}"
            );
        }
    }

    #[test]
    fn options_require_existing_file() {
        let cli = parse(&["-s", "/nonexistent/dir/graph.dot"]).unwrap();
        assert!(matches!(
            Options::try_from(cli),
            Err(UsageError::MissingFile(_))
        ));
    }

    #[test]
    fn options_convert_percent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("g.dot");
        std::fs::write(&file, "digraph G {\n}\n").unwrap();

        let cli = parse(&["-m", "3", "-p", "50", "--seed", "9", file.to_str().unwrap()]).unwrap();
        let options = Options::try_from(cli).unwrap();

        assert_eq!(options.reset_probability, 0.5);
        assert_eq!(options.power_iteration, Some(3));
        assert_eq!(options.seed, Some(9));
        assert!(!options.statistics);
    }
}
