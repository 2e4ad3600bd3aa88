// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration.
//!
//! The employer overhead rate depends on jurisdiction and year, so it is
//! configuration rather than a constant baked into the payroll formulas.

use crate::error::CoreError;
use club_ledger_domain::{DomainError, validate_overhead_rate, validate_session_hours};
use serde::{Deserialize, Serialize};

/// Default statutory employer contribution on top of gross wages (18%).
pub const DEFAULT_EMPLOYER_OVERHEAD_RATE: f64 = 0.18;

/// Session length used when neither a program nor its type sets one.
pub const DEFAULT_SESSION_HOURS: f64 = 1.5;

/// Tunable parameters of the payroll calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Employer overhead applied to base wages (0.18 loads wages by 18%).
    pub employer_overhead_rate: f64,
    /// Fallback hours per session.
    pub default_session_hours: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            employer_overhead_rate: DEFAULT_EMPLOYER_OVERHEAD_RATE,
            default_session_hours: DEFAULT_SESSION_HOURS,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document is not valid JSON or has unknown keys
    /// - A value is out of range
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different employer overhead rate.
    #[must_use]
    pub const fn with_employer_overhead_rate(mut self, rate: f64) -> Self {
        self.employer_overhead_rate = rate;
        self
    }

    /// Validates every value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` naming the first invalid key.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_overhead_rate(self.employer_overhead_rate)
            .map_err(|err| config_error("employer_overhead_rate", err))?;
        validate_session_hours(self.default_session_hours)
            .map_err(|err| config_error("default_session_hours", err))?;
        Ok(())
    }
}

fn config_error(field: &str, err: DomainError) -> CoreError {
    match err {
        DomainError::InvalidInput { message, .. } => CoreError::InvalidConfig {
            field: field.to_string(),
            message,
        },
        other => CoreError::DomainViolation(other),
    }
}
