//! `enigma`: encrypts and decrypts messages with a configured Enigma machine.
//!
//! **Usage:**
//! ```text
//! enigma CONFIG [INPUT] [OUTPUT]
//! ```
//!
//! Reads the machine description from CONFIG, then the setting and message
//! lines from INPUT (standard input if absent), and writes the converted
//! messages in five-letter groups to OUTPUT (standard output if absent).
//! Exits with status 1 on any error.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enigma::{session, MachineConfig};
use log::{info, LevelFilter};

/// Enigma machine simulator.
#[derive(Parser)]
#[command(name = "enigma", version, about = "Enigma rotor cipher machine simulator")]
struct Args {
    /// Machine configuration file.
    config: PathBuf,

    /// Message file (default: standard input).
    input: Option<PathBuf>,

    /// Output file (default: standard output).
    output: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = fs::read_to_string(&args.config)
        .with_context(|| format!("could not open {}", args.config.display()))?;
    let mut machine = MachineConfig::parse(&text)
        .and_then(|config| config.build())
        .with_context(|| format!("bad configuration in {}", args.config.display()))?;

    let input: Box<dyn io::BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let converted = session::process(&mut machine, input, output)?;
    info!("converted {} message lines", converted);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
