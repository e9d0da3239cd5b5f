//! Command-line interface for yarn_deps.
//!
//! The bare invocation reads a yarn v1 lockfile on standard input and writes
//! the generated build file to standard output:
//!
//! ```bash
//! yarn_deps < yarn.lock > third_party/js/BUILD
//! ```
//!
//! # Available Commands
//!
//! - `generate` - the default; same as the bare invocation, optionally reading
//!   the lockfile from `--lockfile <PATH>`
//! - `tree` - convert `yarn list --json` output into `yarn_library` rules
//!
//! # Global Options
//!
//! - `-v/--verbose` - debug logging on stderr
//! - `-q/--quiet` - errors only
//! - `-c/--config <PATH>` - build file configuration (TOML)
//!
//! Logging always goes to stderr. Standard output carries nothing but the
//! generated file, and is written in one piece only after generation
//! succeeded.

mod generate;
mod tree;


pub use generate::{GenerateCommand, generate_build_file};
pub use tree::TreeCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::BuildFileConfig;

/// Runtime configuration for CLI execution.
///
/// Built from the parsed flags by [`Cli::build_config`], or constructed
/// directly by tests that want to run a command without touching global
/// logging state.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// `None` leaves logging at the subscriber default.
    pub log_level: Option<String>,

    /// Build file configuration to load instead of the defaults.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// `RUST_LOG` wins over [`log_level`](Self::log_level) when set. Calling
    /// this more than once is harmless; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("warn"))
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the build file configuration this run should use.
    ///
    /// # Errors
    ///
    /// Fails if a configuration path was given and cannot be loaded.
    pub fn build_file_config(&self) -> Result<BuildFileConfig> {
        BuildFileConfig::load_with_optional(self.config_path.as_deref())
    }
}

/// Generate Please build rules from yarn lockfiles.
#[derive(Parser, Debug)]
#[command(
    name = "yarn_deps",
    about = "Generate yarn_module build rules from a yarn.lock file",
    version,
    long_about = "Reads a yarn v1 lockfile on standard input and writes one yarn_module rule \
                  per locked package version, each listing its full transitive closure, to \
                  standard output."
)]
pub struct Cli {
    /// The subcommand to execute; defaults to `generate`.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging on stderr.
    ///
    /// Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a TOML file overriding the build file preamble and rule
    /// conventions.
    ///
    /// ```bash
    /// yarn_deps --config yarn_deps.toml < yarn.lock
    /// ```
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate build rules from a yarn.lock file (the default)
    Generate(GenerateCommand),

    /// Generate yarn_library rules from `yarn list --json` output
    Tree(TreeCommand),
}

impl Cli {
    /// Execute the parsed command line, initialising logging first.
    ///
    /// # Errors
    ///
    /// Returns any error raised while loading configuration, reading input,
    /// generating rules or writing output.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// ```rust,ignore
    /// let cli = Cli::parse_from(["yarn_deps", "--verbose"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit configuration.
    ///
    /// Does not touch the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Some(Commands::Tree(cmd)) => cmd.execute(),
            Some(Commands::Generate(cmd)) => cmd.execute(&config.build_file_config()?),
            None => GenerateCommand::default().execute(&config.build_file_config()?),
        }
    }
}
