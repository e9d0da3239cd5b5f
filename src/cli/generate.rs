//! Generate a build file from a yarn.lock file.
//!
//! ```bash
//! yarn_deps < yarn.lock > third_party/js/BUILD
//! yarn_deps generate --lockfile web/yarn.lock > third_party/js/BUILD
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::buildfile::BuildFile;
use crate::config::BuildFileConfig;
use crate::core::YarnDepsError;
use crate::lockfile::Lockfile;
use crate::resolver::Resolver;
use crate::version::VersionIndex;

/// Command to compile a lockfile into `yarn_module` rules.
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Read the lockfile from this path instead of standard input
    #[arg(short, long, value_name = "PATH")]
    lockfile: Option<PathBuf>,
}

impl GenerateCommand {
    /// Create a command reading from `lockfile`, or stdin when `None`.
    #[must_use]
    pub const fn new(lockfile: Option<PathBuf>) -> Self {
        Self {
            lockfile,
        }
    }

    /// Run the pipeline and write the result to standard output.
    ///
    /// Nothing is written unless every rule was generated.
    ///
    /// # Errors
    ///
    /// Fails if the lockfile cannot be read or parsed, a requirement is
    /// unresolved, a version is invalid, or stdout cannot be written.
    pub fn execute(&self, config: &BuildFileConfig) -> Result<()> {
        let text = self.render(config)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes()).context("Cannot write build file to standard output")?;
        stdout.flush().context("Cannot write build file to standard output")?;
        Ok(())
    }

    /// Read the lockfile and render the build file without writing it.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn render(&self, config: &BuildFileConfig) -> Result<String> {
        let lockfile = match &self.lockfile {
            Some(path) => Lockfile::load(path)?,
            None => Lockfile::read_from(std::io::stdin().lock())?,
        };
        Ok(generate_build_file(&lockfile, config)?)
    }
}

/// Compile a parsed lockfile into build file text.
///
/// # Errors
///
/// Returns [`YarnDepsError::InvalidVersion`] or
/// [`YarnDepsError::UnresolvedRequirement`] from indexing and resolution.
pub fn generate_build_file(
    lockfile: &Lockfile,
    config: &BuildFileConfig,
) -> Result<String, YarnDepsError> {
    let resolver = Resolver::new(VersionIndex::build(lockfile)?);
    let build_file = BuildFile::generate(&resolver)?;
    Ok(build_file.render(config))
}
