//! Command-line interface.
//!
//! Argument handling turns the raw token list into a validated [`Config`]:
//! wildcard tokens are glob-expanded, unsupported file types are dropped
//! with a warning, and when `--output` is absent the last positional
//! argument names the output file.

use crate::config::{Config, DocumentInfo};
use crate::error::{DocFuseError, Result};
use crate::kind::FileKind;
use crate::utils;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

/// Merge images, PDF files and Markdown documents into a single PDF.
#[derive(Parser, Debug)]
#[command(
    name = "docfuse",
    version,
    arg_required_else_help = true,
    disable_help_flag = true
)]
pub struct Cli {
    /// Input files in merge order. Tokens containing `*` or `?` are
    /// expanded as glob patterns. Without --output, the last argument
    /// names the output PDF.
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF path (overwritten if it exists)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print per-file progress and a merge summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

/// Exit code for an argument-parsing failure.
///
/// Help and version displays are successful runs (0); every other parse
/// error is a usage failure (1).
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

impl Cli {
    /// Build a validated configuration from the parsed arguments.
    ///
    /// Returns the configuration together with warnings collected during
    /// argument handling (unmatched patterns, missing literals, skipped
    /// unsupported files) for the caller to display.
    pub fn to_config(&self) -> Result<(Config, Vec<String>)> {
        let mut tokens = self.inputs.clone();

        let output = match &self.output {
            Some(path) => path.clone(),
            None => {
                if tokens.len() < 2 {
                    return Err(DocFuseError::invalid_config(
                        "an output path and at least one input file are required",
                    ));
                }
                let Some(last) = tokens.pop() else {
                    return Err(DocFuseError::invalid_config("no output path given"));
                };
                PathBuf::from(last)
            }
        };

        let (candidates, mut warnings) = utils::expand_inputs(&tokens)?;

        let mut inputs = Vec::new();
        for path in candidates {
            if FileKind::from_path(&path).is_supported() {
                inputs.push(path);
            } else {
                warnings.push(format!("skipping unsupported file type: {}", path.display()));
            }
        }

        if inputs.is_empty() {
            return Err(DocFuseError::NoFilesToMerge);
        }

        let config = Config {
            inputs,
            output,
            verbose: self.verbose,
            quiet: self.quiet,
            info: DocumentInfo::default(),
        };
        config
            .validate()
            .map_err(|err| DocFuseError::invalid_config(err.to_string()))?;

        Ok((config, warnings))
    }
}
