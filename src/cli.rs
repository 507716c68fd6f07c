//! CLI - Command Line Interface for omdbtui
//!
//! Every lookup the TUI performs is scriptable. Output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! omdbtui search "inception" --json
//! omdbtui search "star trek" --type series --year 1966
//! omdbtui info tt1375666 --plot full
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::app::Notifier;
use crate::models::{MediaType, PlotLength};

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Upstream reported no match
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// omdbtui - search the Open Movie Database from your terminal
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable lookups.
#[derive(Parser, Debug)]
#[command(
    name = "omdbtui",
    version,
    about = "Search the Open Movie Database from your terminal",
    long_about = "Search OMDb for movies and series and read their details.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  omdbtui                            Launch interactive TUI\n\
                  omdbtui search \"inception\"         Search for titles\n\
                  omdbtui info tt1375666 --json      Show one title as JSON"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for movies and series
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Get details for one title by IMDb ID
    #[command(visible_alias = "i")]
    Info(InfoCmd),
}

/// Search titles by query
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results to print
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,

    /// Filter by media type
    #[arg(long, short = 't', value_enum)]
    pub media_type: Option<MediaTypeFilter>,

    /// Release year
    #[arg(long, short = 'y')]
    pub year: Option<u16>,

    /// Result page (10 results per page, 1-100)
    #[arg(long, short = 'p', default_value = "1", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page: u32,
}

/// Media type filter for search
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTypeFilter {
    /// Movies only
    Movie,
    /// Series only
    Series,
    /// Episodes only
    Episode,
}

impl From<MediaTypeFilter> for MediaType {
    fn from(filter: MediaTypeFilter) -> MediaType {
        match filter {
            MediaTypeFilter::Movie => MediaType::Movie,
            MediaTypeFilter::Series => MediaType::Series,
            MediaTypeFilter::Episode => MediaType::Episode,
        }
    }
}

/// Get detailed information about one title
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// IMDb ID (e.g., tt1375666)
    #[arg(required = true)]
    pub imdb_id: String,

    /// Plot length (defaults to the configured value)
    #[arg(long, value_enum)]
    pub plot: Option<PlotArg>,
}

/// Plot length argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotArg {
    Short,
    Full,
}

impl From<PlotArg> for PlotLength {
    fn from(arg: PlotArg) -> PlotLength {
        match arg {
            PlotArg::Short => PlotLength::Short,
            PlotArg::Full => PlotLength::Full,
        }
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print plain lines (human mode) or the JSON form of `data`
    pub fn print_or<T: Serialize>(&self, data: T, lines: &[String]) -> anyhow::Result<()> {
        if self.json {
            return self.print(data);
        }
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

/// Notices from the screen go to stderr like other info messages
impl Notifier for &Output {
    fn notify(&mut self, message: &str) {
        self.info(message);
    }
}

// =============================================================================
// IMDb ID Validation
// =============================================================================

/// Validate IMDb ID format (tt followed by digits)
pub fn validate_imdb_id(id: &str) -> Result<&str, &'static str> {
    if id.starts_with("tt") && id.len() >= 9 && id[2..].chars().all(|c| c.is_ascii_digit()) {
        Ok(id)
    } else {
        Err("Invalid IMDb ID format (expected tt followed by 7+ digits)")
    }
}

// =============================================================================
// Tests
// =============================================================================
