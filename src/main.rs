//! Gomoku AI Engine CLI
//!
//! Reads one move request as JSON from a file argument or stdin, computes the
//! reply on a worker thread under an outer deadline and prints one JSON reply
//! on stdout. Logs go to stderr.
//!
//! ```text
//! gomoku [--config <path>] [request.json]
//! gomoku --health
//! ```
//!
//! Exit codes: 0 move found, 2 any failure, 3 outer deadline exceeded.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use anyhow::{bail, Context};
use log::{LevelFilter, Log, Metadata, Record};

use gomoku::config::DEFAULT_CONFIG_PATH;
use gomoku::protocol::{MoveRequest, MoveResponse};
use gomoku::rules::find_winner;
use gomoku::{AIEngine, EngineConfig};

const EXIT_FAILURE: u8 = 2;
const EXIT_TIMEOUT: u8 = 3;

/// The caller's own deadline passed before the engine answered.
#[derive(Debug, thiserror::Error)]
#[error("AI computation exceeded {0}s")]
struct OuterTimeout(f64);

/// Plain stderr logger; stdout carries only the JSON reply.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}

#[derive(Debug, Default)]
struct Args {
    health: bool,
    config: Option<PathBuf>,
    request: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--health" => args.health = true,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if args.request.is_some() {
                    bail!("only one request file may be given");
                }
                args.request = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
    match &args.config {
        Some(path) => Ok(EngineConfig::load(path)?),
        None => Ok(EngineConfig::load_or_default(DEFAULT_CONFIG_PATH)?),
    }
}

fn read_request(path: Option<&PathBuf>) -> anyhow::Result<MoveRequest> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read request from stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("malformed move request")
}

/// Run the engine off the main thread and wait at most the outer timeout.
///
/// On timeout the worker is abandoned; nothing it computes later is used.
fn run(request: MoveRequest, config: EngineConfig) -> anyhow::Result<(usize, usize)> {
    let (board, player) = request.parse()?;
    if let Some(winner) = find_winner(&board) {
        log::warn!("{winner:?} already has five on the submitted board");
    }
    log::debug!("searching for {player:?} on\n{board}");

    let outer = config.outer_timeout();
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("gomoku-search".to_string())
        .spawn(move || {
            let mut engine = AIEngine::with_config(config);
            // Receiver may be gone after a timeout
            let _ = tx.send(engine.get_move(&board, player));
        })
        .context("failed to spawn search thread")?;

    match rx.recv_timeout(outer) {
        Ok(result) => {
            let pos = result?;
            Ok((pos.row, pos.col))
        }
        Err(RecvTimeoutError::Timeout) => Err(OuterTimeout(outer.as_secs_f64()).into()),
        Err(RecvTimeoutError::Disconnected) => bail!("search thread exited without a result"),
    }
}

fn respond(args: &Args) -> anyhow::Result<(usize, usize)> {
    let config = load_config(args)?;
    init_logging(&config.log_level);
    let request = read_request(args.request.as_ref())?;
    run(request, config)
}

/// Reply and exit code for a finished request.
fn outcome(result: anyhow::Result<(usize, usize)>) -> (MoveResponse, u8) {
    match result {
        Ok((row, col)) => (MoveResponse::from_move(row, col), 0),
        Err(e) if e.is::<OuterTimeout>() => {
            log::error!("{e}");
            (MoveResponse::error(e.to_string()), EXIT_TIMEOUT)
        }
        Err(e) => {
            log::error!("{e:#}");
            (MoveResponse::error(format!("{e:#}")), EXIT_FAILURE)
        }
    }
}

fn dispatch(args: &Args) -> (MoveResponse, u8) {
    if args.health {
        return (MoveResponse::ok(), 0);
    }
    outcome(respond(args))
}

fn emit(reply: &MoveResponse) {
    match serde_json::to_string(reply) {
        Ok(line) => println!("{line}"),
        Err(e) => eprintln!("failed to encode reply: {e}"),
    }
}

fn main() -> ExitCode {
    let (reply, code) = match parse_args() {
        Ok(args) => dispatch(&args),
        Err(e) => (MoveResponse::error(format!("{e:#}")), EXIT_FAILURE),
    };
    emit(&reply);
    ExitCode::from(code)
}
