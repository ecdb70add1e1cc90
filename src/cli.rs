// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Confgen - Firmware Configuration Header Generator
///
/// Embed a YAML configuration as a JSON string literal in a generated
/// C header for consumption by firmware source code.
#[derive(Parser, Debug)]
#[command(name = "confgen")]
#[command(author = "Confgen Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Firmware configuration header generator")]
#[command(long_about = "Confgen - Firmware Configuration Header Generator

Reads config.yaml from the project root and emits src/config.h, a generated
header embedding the configuration as a JSON string literal.

Confgen helps you:
  • Keep device settings in a single editable YAML file
  • Scaffold a default configuration for new checkouts
  • Regenerate the config header deterministically at build time
  • Detect scaffold placeholder values before flashing")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Scaffold a configuration:      confgen init
  2. Edit your settings:            Edit config.yaml
  3. Generate the header:           confgen generate
  4. Verify the configuration:      confgen check

For detailed help on each command, use: confgen <command> --help")]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the config header from the configuration file
    ///
    /// Loads config.yaml, encodes it as JSON and writes src/config.h.
    /// When the configuration file is missing, a default one is scaffolded
    /// and the run terminates with a non-zero status so the settings can be
    /// edited before re-running.
    ///
    /// EXAMPLES:
    ///   # Generate with default paths
    ///   confgen generate
    ///
    ///   # Generate from a custom config into a custom header
    ///   confgen generate --config boards/gps.yaml --output src/gps_config.h
    Generate {
        /// Path to the configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Path to the generated header
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Scaffold a default configuration file
    ///
    /// Writes config.yaml with placeholder values meant to be edited by a
    /// human before the first header generation.
    ///
    /// EXAMPLES:
    ///   # Create config.yaml with placeholder values
    ///   confgen init
    ///
    ///   # Overwrite an existing configuration
    ///   confgen init --force
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the configuration without writing the header
    ///
    /// Parses the configuration file and reports scaffold placeholder values
    /// that still need to be edited.
    ///
    /// EXAMPLES:
    ///   # Check the default configuration file
    ///   confgen check
    ///
    ///   # Check a custom configuration file
    ///   confgen check --config boards/gps.yaml
    Check {
        /// Path to the configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
