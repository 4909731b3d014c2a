pub mod commands;
pub mod gate;
pub mod summary;

use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use crate::errors::AuditError;

pub use commands::{GateArgs, GlobalArgs, SummaryArgs, VERSION};

/// Parse process arguments. Help and version exit 0 through clap; anything
/// else becomes a usage error so it can be reported on stdout with exit 2.
pub fn parse_args<T: Parser>() -> Result<T, AuditError> {
    T::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => AuditError::Usage(e.render().to_string().trim_end().to_string()),
    })
}

/// Initialize logging on stderr. Stdout carries the machine-readable summary.
pub fn init_logging(global: &GlobalArgs) {
    let log_level = match global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if global.no_color {
        console::set_colors_enabled(false);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!global.no_color)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error line on stdout, where CI log scrapers look for it.
pub fn print_error(message: &str) {
    println!("{} {}", style("ERROR:").red().bold(), message);
}
