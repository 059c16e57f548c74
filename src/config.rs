//! Configuration for record assembly and the line driver.
//!
//! [`SurveyConstants`] holds the values attached unchanged to every record
//! (state, principal meridian, and the fraction/duplicate fields the book
//! never uses). [`DriverConfig`] adds how a batch is driven.

use serde::Serialize;

use crate::error::{CaveError, Result};
use crate::recovery::RecoveryMode;

/// Fixed survey fields attached to every record.
///
/// # Examples
///
/// ```
/// use bretz::SurveyConstants;
///
/// let constants = SurveyConstants::default();
/// assert_eq!(constants.state, "MO");
/// assert_eq!(constants.meridian, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyConstants {
    /// Two-letter state code
    pub state: String,
    /// Principal meridian code (5 is the Fifth Principal Meridian)
    pub meridian: u8,
    /// Township fraction
    pub township_fraction: u8,
    /// Range fraction
    pub range_fraction: u8,
    /// Township duplicate flag
    pub township_duplicate: u8,
}

impl Default for SurveyConstants {
    fn default() -> Self {
        Self {
            state: "MO".to_string(),
            meridian: 5,
            township_fraction: 0,
            range_fraction: 0,
            township_duplicate: 0,
        }
    }
}

impl SurveyConstants {
    /// Check that the constants are usable in a TRS query.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::InvalidConfig`] if the state is not two uppercase
    /// ASCII letters.
    pub fn validate(&self) -> Result<()> {
        let valid_state =
            self.state.len() == 2 && self.state.chars().all(|c| c.is_ascii_uppercase());
        if !valid_state {
            return Err(CaveError::InvalidConfig(format!(
                "state code must be two uppercase letters, got '{}'",
                self.state
            )));
        }
        Ok(())
    }
}

/// Configuration for driving a batch of cave descriptions.
///
/// ```
/// use bretz::{DriverConfig, RecoveryMode};
///
/// let config = DriverConfig {
///     recovery_mode: RecoveryMode::Strict,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Constants attached to every record
    pub constants: SurveyConstants,
    /// What to do with a rejected line
    pub recovery_mode: RecoveryMode,
    /// Parse lines on the rayon thread pool
    pub parallel: bool,
}

impl DriverConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::InvalidConfig`] if the constants are invalid.
    pub fn validate(&self) -> Result<()> {
        self.constants.validate()
    }
}
