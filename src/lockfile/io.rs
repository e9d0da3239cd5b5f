//! Reading lockfiles from disk or a stream.
//!
//! The whole input is read into memory before parsing starts, so a parse
//! failure can never leave partially generated output behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use super::Lockfile;

impl Lockfile {
    /// Load and parse a lockfile from disk.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid yarn v1 lockfile.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot read lockfile: {}\n\n\
                    Possible causes:\n\
                    - File doesn't exist (run 'yarn install' to create it)\n\
                    - Permission denied (check file ownership)",
                path.display()
            )
        })?;

        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(Self::parse(&content)?)
    }

    /// Read a lockfile to the end of `reader` and parse it.
    ///
    /// # Errors
    ///
    /// Fails if the stream is not valid UTF-8, cannot be read, or does not
    /// parse.
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Cannot read lockfile from standard input")?;

        tracing::debug!("Read {} bytes of lockfile input", content.len());
        Ok(Self::parse(&content)?)
    }
}
