//! Core types shared across yarn-deps.
//!
//! Currently this is the error system: [`YarnDepsError`] for typed failures and
//! [`ErrorContext`] / [`user_friendly_error`] for presenting them on the command
//! line.

pub mod error;

pub use error::{ErrorContext, YarnDepsError, user_friendly_error};
