//! yarn_deps CLI entry point
//!
//! Parses arguments, runs the selected command and reports failures on
//! stderr with a non-zero exit status.
//!
//! - `yarn_deps < yarn.lock` - generate a build file (same as `generate`)
//! - `yarn_deps generate --lockfile <PATH>` - read the lockfile from a path
//! - `yarn_deps tree` - convert `yarn list --json` output

use anyhow::Result;
use clap::Parser;
use yarn_deps::cli;
use yarn_deps::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
