use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use regex_roulette::{Console, Session, SessionOptions, StdConsole};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Test these patterns once each and exit, instead of prompting
    #[arg(short = 'p', long, value_name = "PATTERN")]
    pattern: Vec<String>,

    /// Always show passing cases
    #[arg(short = 'v', long, conflicts_with = "terse")]
    verbose: bool,

    /// Never show passing cases
    #[arg(short = 't', long)]
    terse: bool,

    /// Seed for shuffling results (repeatable sessions)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Report results in catalog order
    #[arg(long)]
    no_shuffle: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: Level,
}

impl Args {
    /// Map the flags to session options.  `color_allowed` carries what the
    /// environment says: `NO_COLOR` unset and stdout a terminal.
    fn session_options(&self, color_allowed: bool) -> SessionOptions {
        let verbose = if self.verbose {
            Some(true)
        } else if self.terse {
            Some(false)
        } else {
            None
        };
        SessionOptions {
            shuffle: !self.no_shuffle,
            verbose,
            seed: self.seed,
            color: color_allowed && !self.no_color,
        }
    }
}

fn color_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty()
}

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("regex-roulette: logging disabled: {}", err);
    }
}

/// Run the requested mode, returning the process exit status.
fn run(args: &Args, console: &mut dyn Console) -> Result<i32> {
    let options = args.session_options(color_allowed());
    let mut session = Session::new(options);

    if args.pattern.is_empty() {
        session.run(console)?;
        return Ok(0);
    }

    let verbose = options.verbose.unwrap_or(false);
    let all_compiled = session.run_patterns(&args.pattern, verbose, console)?;
    Ok(if all_compiled { 0 } else { 1 })
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level);

    let status = run(&args, &mut StdConsole::new()).unwrap_or_else(|err| {
        eprintln!("regex-roulette: {:#}", err);
        1
    });
    std::process::exit(status);
}
