mod handlers;
pub mod parse;

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use handlers::{analyze_file, read_input};
pub use parse::Cli;

use crate::core::{config::Config, error::TextalyzeError, terminal};

/// Parse arguments, analyze every file in order, report failures at the end.
///
/// A file that cannot be analyzed is logged and skipped; the exit code is
/// non-zero if any file failed.
pub fn run() -> Result<ExitCode, TextalyzeError> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let cfg = Config::builder(cli.width.unwrap_or_else(terminal::max_bar_length))
        .precision_opt(cli.precision)
        .bar_glyph_opt(cli.glyph)
        .build()?;
    let analysis = cli.analysis();
    info!(?analysis, max_bar_length = cfg.max_bar_length, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for path in &cli.files {
        match handlers::analyze_file(&mut out, path, &analysis, &cfg) {
            Ok(()) => {}
            Err(e @ TextalyzeError::Output(_)) => return Err(e),
            Err(e) => {
                error!(%path, "skipping file: {e}");
                failed += 1;
            }
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level picked by `--debug`.
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
