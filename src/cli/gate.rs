//! Shared-passphrase check in front of the coach commands.
//!
//! The core never checks access; only the CLI does, before dispatching.

use crate::errors::{AppError, AppResult};

pub struct AccessGate<'a> {
    expected: &'a str,
}

impl<'a> AccessGate<'a> {
    pub fn new(expected: &'a str) -> Self {
        Self { expected }
    }

    pub fn check(&self, supplied: Option<&str>) -> AppResult<()> {
        match supplied {
            Some(p) if !self.expected.is_empty() && p == self.expected => Ok(()),
            _ => Err(AppError::AccessDenied),
        }
    }
}
