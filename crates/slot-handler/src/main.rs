//! `free-slots` CLI — run the availability handler on one request.
//!
//! ## Usage
//!
//! ```sh
//! # Invocation event on stdin, sentence on stdout
//! echo '{"body":"{\"calendars\":{}}"}' | free-slots
//!
//! # Bare request body from a file
//! free-slots --raw-body -i busy.json
//!
//! # Full response envelope as JSON
//! free-slots --envelope -i event.json
//! ```
//!
//! Exits 0 when the handler answers 200 and 1 otherwise. Logs go to stderr;
//! set `RUST_LOG` to change the level (default `warn`).

use anyhow::{Context, Result};
use clap::Parser;
use slot_handler::{handle, InvocationEvent};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "free-slots",
    version,
    about = "Render free working-day time slots from calendar busy intervals"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Treat the input as the request body instead of an invocation event
    #[arg(long)]
    raw_body: bool,

    /// Print the full response envelope as JSON instead of the body
    #[arg(long)]
    envelope: bool,
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    let input = read_input(cli.input.as_deref())?;
    let event = if cli.raw_body {
        InvocationEvent::with_body(input)
    } else if input.trim().is_empty() {
        InvocationEvent::default()
    } else {
        serde_json::from_str(&input).context("Failed to parse invocation event")?
    };

    let response = handle(&event);

    if cli.envelope {
        let json = serde_json::to_string_pretty(&response)?;
        println!("{}", json);
    } else {
        println!("{}", response.body);
    }

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
