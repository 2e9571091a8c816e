//! Mazeshift: a shifting-maze relic hunt played from the terminal.
//!
//! Usage:
//!   mazeshift <board-file> [OPTIONS]
//!
//! Options:
//!   --quiet       Do not print input prompts
//!   --no-render   Only draw the maze on `show`
//!   --help        Print this message
//!
//! Reads whitespace-separated commands from stdin and writes the game
//! transcript to stdout. Log output goes to stderr and is controlled by
//! `RUST_LOG` (default `warn`).

use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::process;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mazeshift::engine::{Engine, EngineOptions};
use mazeshift::protocol::layout::parse_layout;
use mazeshift::protocol::parser::parse_command;

struct Args {
    board_path: String,
    options: EngineOptions,
}

fn print_usage() {
    eprintln!("Usage: mazeshift <board-file> [--quiet] [--no-render] [--help]");
}

/// Parses the command line. Returns `Ok(None)` when only help was asked for.
fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut options = EngineOptions::default();
    let mut board_path = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--quiet" => options.prompts = false,
            "--no-render" => options.render = false,
            "--help" | "-h" => return Ok(None),
            other if other.starts_with("--") => return Err(format!("unknown argument: {other}")),
            other => {
                if board_path.replace(other.to_string()).is_some() {
                    return Err(format!("unexpected argument: {other}"));
                }
            }
        }
    }

    let board_path = board_path.ok_or_else(|| "missing board file".to_string())?;
    Ok(Some(Args { board_path, options }))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), String> {
    let text = fs::read_to_string(&args.board_path)
        .map_err(|e| format!("cannot read board file {}: {e}", args.board_path))?;
    let layout = parse_layout(&text).map_err(|e| format!("invalid board file {}: {e}", args.board_path))?;
    info!(path = %args.board_path, "loaded board");

    let mut engine = Engine::new(layout.into_game(), args.options);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let io_err = |e: io::Error| format!("write failed: {e}");

    engine.handle_start(&mut out).map_err(io_err)?;
    engine.handle_prompt(&mut out).map_err(io_err)?;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "stopped reading input");
                break;
            }
        };
        for word in line.split_whitespace() {
            engine.handle_command(parse_command(word), &mut out).map_err(io_err)?;
            if !engine.is_running() {
                return Ok(());
            }
            engine.handle_prompt(&mut out).map_err(io_err)?;
        }
    }

    info!("input closed");
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(Some(a)) => a,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            process::exit(2);
        }
    };

    init_logging();
    if let Err(e) = run(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}
