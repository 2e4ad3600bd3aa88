// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_ledger_domain::DomainError;
use thiserror::Error;

/// Errors raised outside the pure calculations: configuration and wrapped
/// domain failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The configuration key.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}
