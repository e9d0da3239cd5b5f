//! Convert `yarn list --json` output into `yarn_library` rules.
//!
//! ```bash
//! yarn list --json | yarn_deps tree >> third_party/js/BUILD
//! yarn_deps tree --input list.json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::tree::LibraryTree;

/// Command to convert a yarn dependency listing.
#[derive(Args, Debug, Default)]
pub struct TreeCommand {
    /// Read the listing from this path instead of standard input
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,
}

impl TreeCommand {
    /// Create a command reading from `input`, or stdin when `None`.
    #[must_use]
    pub const fn new(input: Option<PathBuf>) -> Self {
        Self {
            input,
        }
    }

    /// Convert the listing and write the rules to standard output.
    ///
    /// # Errors
    ///
    /// Fails if the input cannot be read or is not a usable listing.
    pub fn execute(&self) -> Result<()> {
        let text = self.render()?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes()).context("Cannot write rules to standard output")?;
        stdout.flush().context("Cannot write rules to standard output")?;
        Ok(())
    }

    /// Read, prune and render the listing without writing it.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn render(&self) -> Result<String> {
        let json = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read yarn list output: {}", path.display()))?,
            None => {
                let mut json = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut json)
                    .context("Cannot read yarn list output from standard input")?;
                json
            }
        };

        let mut tree = LibraryTree::from_json(&json)?;
        tree.prune_cycles()?;
        Ok(tree.render())
    }
}
