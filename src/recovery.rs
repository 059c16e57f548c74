//! Recovery strategies for rejected cave description lines.
//!
//! A transcription of the book contains scanning noise and typos, so the
//! default is to skip a bad line, remember why, and keep going. Strict mode
//! turns the first rejection into an error instead.

use crate::batch::Rejection;
use crate::error::{CaveError, Result};

/// Strategy for handling lines the grammar rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Strict mode: return an error for the first rejected line
    Strict,
    /// Lenient mode: skip rejected lines and collect them for the summary (default)
    #[default]
    Lenient,
}

/// Recovery context collecting rejections for a run
#[derive(Debug, Default)]
pub struct RecoveryContext {
    /// Current recovery mode
    pub mode: RecoveryMode,
    /// Rejected lines in input order
    pub rejections: Vec<Rejection>,
}

impl RecoveryContext {
    /// Create a new recovery context with the given mode
    #[must_use]
    pub fn new(mode: RecoveryMode) -> Self {
        RecoveryContext {
            mode,
            rejections: Vec::new(),
        }
    }

    /// Try to recover from a rejected line based on the recovery mode
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::Rejected`] in strict mode, otherwise records the
    /// rejection and returns `Ok(())`.
    pub fn recover(&mut self, rejection: Rejection) -> Result<()> {
        tracing::warn!(
            line = rejection.line_number,
            stage = rejection.failure.stage().map_or("none", |s| s.label()),
            position = rejection.failure.position(),
            "rejected cave description"
        );
        match self.mode {
            RecoveryMode::Strict => Err(CaveError::Rejected(Box::new(rejection))),
            RecoveryMode::Lenient => {
                self.rejections.push(rejection);
                Ok(())
            },
        }
    }

    /// Take the collected rejections, leaving the context empty
    pub fn take_rejections(&mut self) -> Vec<Rejection> {
        std::mem::take(&mut self.rejections)
    }
}
