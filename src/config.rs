//! Command line configuration for tty-clock
//!
//! There are no configuration files; everything comes from flags, plus an
//! optional log directory taken from the environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Environment variable naming the directory for log files
pub const LOG_DIR_ENV: &str = "TTY_CLOCK_LOG_DIR";

pub const HELP: &str = "\
tty-clock usage : tty-clock -[option] -[option] <arg>

  -s, --second           Show seconds
  -b, --block            Lock the keyboard
  -c, --center           Set the clock at the center of the terminal
  -t, --twelve           Set the hour in 12h format
  -x  <integer>          Set the clock to X
  -y  <integer>          Set the clock to Y
  -v, --version          Show tty-clock version
  -i, --info             Show some info about tty-clock
  -h, --help             Show this page

Try keypad arrow for move the clock :-)
push S for enable the second and T for enable the 12H hours format.
";

pub const INFO: &str = "tty-clock, after TTY-Clock by Martin Duquesnoy (xorg62@gmail.com)";

/// Raw command line flags
///
/// Built-in help and version handling is disabled: both, like any parse
/// error, print the usage page and exit successfully.
#[derive(Parser, Debug)]
#[command(
    name = "tty-clock",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    #[arg(short = 's', long = "second")]
    pub second: bool,

    #[arg(short = 't', long = "twelve")]
    pub twelve: bool,

    #[arg(short = 'b', long = "block")]
    pub block: bool,

    #[arg(short = 'c', long = "center")]
    pub center: bool,

    #[arg(short = 'x', value_parser = parse_lenient_int, allow_hyphen_values = true)]
    pub x: Option<i32>,

    #[arg(short = 'y', value_parser = parse_lenient_int, allow_hyphen_values = true)]
    pub y: Option<i32>,

    #[arg(short = 'v', long = "version")]
    pub version: bool,

    #[arg(short = 'i', long = "info")]
    pub info: bool,

    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

/// Resolved settings for a clock run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub show_seconds: bool,
    pub twelve_hour: bool,
    /// Ignore keyboard commands
    pub block_keys: bool,
    /// Start centered
    pub center: bool,
    /// Starting row of the clock, if given
    pub start_row: Option<i32>,
    /// Starting column of the clock, if given
    pub start_col: Option<i32>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            show_seconds: cli.second,
            twelve_hour: cli.twelve,
            block_keys: cli.block,
            center: cli.center,
            start_row: start_offset(cli.x),
            start_col: start_offset(cli.y),
        }
    }
}

/// What the process should do after reading its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Start the clock
    Run(Config),
    /// Print this text to stdout and exit with success
    Print(String),
}

/// Interpret the command line
pub fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!("Argument parse failed, showing usage: {:?}", e.kind());
            return Invocation::Print(HELP.to_string());
        }
    };

    if cli.help {
        Invocation::Print(HELP.to_string())
    } else if cli.version {
        Invocation::Print(format!("tty-clock {}\n", env!("CARGO_PKG_VERSION")))
    } else if cli.info {
        Invocation::Print(format!("{}\n", INFO))
    } else {
        Invocation::Run(Config::from(cli))
    }
}

/// Directory for log files, if logging is enabled
pub fn log_dir() -> Option<PathBuf> {
    std::env::var_os(LOG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Positive positions are shifted past the border; anything else is ignored
fn start_offset(value: Option<i32>) -> Option<i32> {
    value.filter(|&v| v > 0).map(|v| v.saturating_add(1))
}

/// Parse a leading integer the way C's `atoi` does: junk yields 0
fn parse_lenient_int(s: &str) -> Result<i32, String> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i32 = digits[..end].parse().unwrap_or(0);
    Ok(if negative { -magnitude } else { magnitude })
}
