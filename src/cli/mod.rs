//! Command-line interface module

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::convert::ConvertConfig;
use crate::error::{ConvertError, ConvertResult};

pub mod path_mapping;

/// Source path of the reference invocation, used when no input is given.
pub const DEFAULT_INPUT: &str = "public/scenarios.tsv";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "tsv2json")]
#[command(about = "Convert tab-separated-values files to JSON arrays of records")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input TSV file or directory (default: public/scenarios.tsv)
    #[arg()]
    pub input: Option<PathBuf>,

    /// Output path (default: input path with a .json extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read TSV from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub convert_config: ConvertConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConvertResult<Self> {
        let convert_config = Self::create_convert_config(&args)?;

        Ok(Self {
            args,
            convert_config,
        })
    }

    fn create_convert_config(args: &Args) -> ConvertResult<ConvertConfig> {
        let config = ConvertConfig {
            indent_size: args.indent.unwrap_or(2),
            pretty: !args.compact,
        };

        config.validate().map_err(ConvertError::configuration)?;

        Ok(config)
    }

    /// The effective input path, falling back to the reference source.
    pub fn input_path(&self) -> PathBuf {
        self.args
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// The effective output path for a file input.
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.args
            .output
            .clone()
            .unwrap_or_else(|| input.with_extension("json"))
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConvertError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    if matches!(error, ConvertError::NotFound { .. }) {
        eprintln!("\nTip: pass an input path or run from the directory containing it");
    }

    eprintln!("\nTry 'tsv2json --help' for usage information.");
}
