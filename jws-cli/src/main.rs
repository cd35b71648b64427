#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{error, process};

mod app;
mod commands;
mod interact;

use commands::Commands;

use clap::{Args, Parser};
use log::trace;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> Result<(), Box<dyn error::Error>> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                base_url,
                interact,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    // `quiet` and `interact` cannot be set at the same time
    let interact = quiet ^ interact;

    if interact {
        trace!("Interact mode enabled");
    }

    let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

    let message = command.execute(&base_url, interact)?;
    println!("{message}");
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), Box<dyn error::Error>> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet {
        dbg!("quiet flag used but dbg! and error will still be shown");
        1
    } else {
        verbosity + 2
    };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "jws")]
#[clap(about = "Search the works of an academic journal by ISSN in the terminal")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Base URL of the works service
    #[clap(short, long, global = true)]
    base_url: Option<String>,

    /// Enables interactive mode, which fills the search form with prompts instead of options.
    #[clap(short, long, global = true)]
    interact: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Prevents the program from writing to stdout, errors will still be printed to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}
