//! Error handling for yarn-deps
//!
//! This module provides the typed errors raised while compiling a lockfile into
//! build rules, and the user-facing wrapper used by the binary to report them.
//! The design follows two rules:
//! 1. **Strongly-typed errors** so library callers can match on failure modes
//! 2. **User-friendly messages** with details and a suggestion for CLI users
//!
//! # Error Categories
//!
//! - **Lockfile text**: [`YarnDepsError::LockfileParseError`]
//! - **Resolution**: [`YarnDepsError::UnresolvedRequirement`],
//!   [`YarnDepsError::InvalidVersion`]
//! - **Legacy tree input**: [`YarnDepsError::TreeParseError`],
//!   [`YarnDepsError::UnknownPackage`]
//! - **Environment**: [`YarnDepsError::ConfigError`], [`YarnDepsError::IoError`]
//!
//! Dependency cycles are not errors. The resolver truncates them silently.
//!
//! # Examples
//!
//! ```rust,no_run
//! use yarn_deps::core::{YarnDepsError, user_friendly_error};
//!
//! let error = YarnDepsError::UnresolvedRequirement {
//!     name: "left-pad".to_string(),
//!     requirement: "^1.0.0".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for yarn-deps operations.
///
/// Every variant is fatal: the pipeline stops before anything is written to
/// standard output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YarnDepsError {
    /// The lockfile text is malformed.
    ///
    /// Raised for grammar problems (bad indentation, unterminated strings,
    /// duplicate keys) and for entries missing a required field.
    #[error("Invalid lockfile: {reason}")]
    LockfileParseError {
        /// What was wrong with the text or entry
        reason: String,
    },

    /// A `name@requirement` pair has no entry in the lockfile.
    ///
    /// The lockfile does not satisfy the dependency graph it describes,
    /// usually because it was edited by hand or is out of date.
    #[error("No lockfile entry for requirement '{name}@{requirement}'")]
    UnresolvedRequirement {
        /// Package name
        name: String,
        /// Requirement string as written in the dependent's entry
        requirement: String,
    },

    /// A locked version is not a valid semantic version.
    #[error("Package '{name}' is locked at '{version}', which is not a valid semantic version")]
    InvalidVersion {
        /// Package name
        name: String,
        /// The offending version string
        version: String,
    },

    /// The `yarn list --json` document could not be read.
    #[error("Invalid yarn list output: {reason}")]
    TreeParseError {
        /// Description of the problem
        reason: String,
    },

    /// A package referenced as a child in `yarn list` output has no tree of its own.
    #[error("Package '{name}' is referenced by '{parent}' but is not listed")]
    UnknownPackage {
        /// Missing package name
        name: String,
        /// Package whose children referenced it
        parent: String,
    },

    /// Configuration file problem.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {message}")]
    IoError {
        /// The underlying error message
        message: String,
    },

    /// Anything else, already formatted for display.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A [`YarnDepsError`] together with optional details and a suggestion.
///
/// Built by [`user_friendly_error`] and printed by the binary on failure.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The underlying error
    pub error: YarnDepsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: YarnDepsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colours.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] for CLI display.
///
/// Typed [`YarnDepsError`]s anywhere in the `anyhow` chain get tailored
/// details and suggestions. I/O errors get filesystem guidance. Anything else
/// is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(typed) = cause.downcast_ref::<YarnDepsError>() {
            return create_error_context(typed.clone());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let ctx = ErrorContext::new(YarnDepsError::IoError {
            message: format!("{error:#}"),
        });
        return match io_error.kind() {
            std::io::ErrorKind::NotFound => ctx
                .with_suggestion("Check that the file exists and the path is correct"),
            std::io::ErrorKind::PermissionDenied => {
                ctx.with_suggestion("Check the file's ownership and permissions")
            }
            _ => ctx,
        };
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(YarnDepsError::Other {
        message,
    })
}

fn create_error_context(error: YarnDepsError) -> ErrorContext {
    match &error {
        YarnDepsError::LockfileParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Regenerate the lockfile with 'yarn install' and pipe the new yarn.lock in")
            .with_details("Only yarn v1 (classic) lockfiles are understood"),

        YarnDepsError::UnresolvedRequirement { name, requirement } => {
            let suggestion = format!(
                "Run 'yarn install' so that yarn.lock records a resolution for {name}@{requirement}"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Every requirement listed under dependencies or optionalDependencies must have its own lockfile entry")
        }

        YarnDepsError::InvalidVersion { .. } => ErrorContext::new(error)
            .with_details("Versions are compared with semantic versioning to decide which rule keeps the bare package name"),

        YarnDepsError::TreeParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Produce the input with 'yarn list --json'"),

        YarnDepsError::UnknownPackage { .. } => ErrorContext::new(error)
            .with_suggestion("List dependencies flat with 'yarn install --flat' before running 'yarn list --json'"),

        YarnDepsError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax and field names of the configuration file"),

        YarnDepsError::IoError { .. } | YarnDepsError::Other { .. } => ErrorContext::new(error),
    }
}
