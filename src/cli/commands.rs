use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, Parser};

/// Version banner: crate version, git hash and build time stamped by build.rs.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

const HYPHEN_PATHS: &str = "Paths that begin with '-' must follow '--'.";

/// Path positionals accept any value, including an empty one, so a bad path
/// surfaces as a read or write error rather than a usage error.
fn path_value() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

/// Flags shared by both gates.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Increase log verbosity on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "counterexample-gate",
    version = VERSION,
    about = "Fail the build when an Echidna report contains counterexamples",
    after_help = HYPHEN_PATHS
)]
pub struct GateArgs {
    /// Echidna JSON report
    #[arg(value_parser = path_value())]
    pub report: PathBuf,

    /// Ignored
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub extra: Vec<OsString>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "findings-summary",
    version = VERSION,
    about = "Summarize a Slither report and fail the build on high-severity findings",
    after_help = HYPHEN_PATHS
)]
pub struct SummaryArgs {
    /// Slither JSON report
    #[arg(value_parser = path_value())]
    pub input: PathBuf,

    /// Where to write the JSON summary
    #[arg(value_parser = path_value())]
    pub output: PathBuf,

    /// Optional Markdown summary to write alongside the JSON (empty means none)
    #[arg(value_parser = path_value())]
    pub markdown: Option<PathBuf>,

    /// Ignored
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub extra: Vec<OsString>,

    #[command(flatten)]
    pub global: GlobalArgs,
}
