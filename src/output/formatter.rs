//! CLI message formatting.
//!
//! One formatter instance carries the run's verbosity settings. Status
//! messages go to stdout and are suppressed in quiet mode; warnings and
//! errors go to stderr and always print. Color is applied only when the
//! target is a terminal.

use crate::config::Config;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";

/// Severity of a message, mapped to its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Neutral status output.
    Info,
    /// Completed operation.
    Success,
    /// Recoverable problem.
    Warning,
    /// Failure.
    Error,
}

/// Formatter for user-facing CLI output.
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    color_stdout: bool,
    color_stderr: bool,
}

impl OutputFormatter {
    /// Create a formatter with explicit flags.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            color_stdout: std::io::stdout().is_terminal(),
            color_stderr: std::io::stderr().is_terminal(),
        }
    }

    /// Create a formatter from a merge configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Whether verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Neutral status message (suppressed when quiet).
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Success message (suppressed when quiet).
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.paint(MessageLevel::Success, message, self.color_stdout));
        }
    }

    /// Warning, printed to stderr even in quiet mode.
    pub fn warning(&self, message: &str) {
        eprintln!(
            "{}",
            self.paint(MessageLevel::Warning, &format!("Warning: {message}"), self.color_stderr)
        );
    }

    /// Error, printed to stderr even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!(
            "{}",
            self.paint(MessageLevel::Error, &format!("Error: {message}"), self.color_stderr)
        );
    }

    /// Indented detail line (verbose mode only).
    pub fn detail(&self, message: &str) {
        if self.verbose && !self.quiet {
            if self.color_stdout {
                println!("  {DIM}{message}{RESET}");
            } else {
                println!("  {message}");
            }
        }
    }

    /// Per-file progress line (verbose mode only).
    pub fn progress(&self, current: usize, total: usize, name: &str) {
        if self.verbose && !self.quiet {
            println!("[{current}/{total}] {name}");
        }
    }

    fn paint(&self, level: MessageLevel, message: &str, colored: bool) -> String {
        if !colored {
            return message.to_string();
        }
        let color = match level {
            MessageLevel::Info => return message.to_string(),
            MessageLevel::Success => GREEN,
            MessageLevel::Warning => YELLOW,
            MessageLevel::Error => RED,
        };
        format!("{color}{message}{RESET}")
    }
}
