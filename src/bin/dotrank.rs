use std::io::{self, BufWriter};

use clap::{CommandFactory, Parser, error::ErrorKind};
use dotrank::{
    cli::{self, Cli, Options, UsageError},
    exit::Exit,
};

fn main() -> Exit {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Exit::Success,
                _ => Exit::Error,
            };
        }
    };

    cli::init_logging(args.verbose);

    let options = match Options::try_from(args) {
        Ok(options) => options,
        Err(UsageError::NoMode) => {
            let _ = Cli::command().print_help();
            return Exit::Error;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return Exit::Error;
        }
    };

    let stdout = io::stdout();
    Exit::from(cli::run(&options, BufWriter::new(stdout.lock())))
}
