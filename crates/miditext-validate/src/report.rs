use serde::{Deserialize, Serialize};

/// Outcome of one validation pass.
///
/// `success` is false only for fatal input or an internal failure; warnings
/// and applied fixes never flip it. When `success` is false, `midi` is the
/// original input unchanged and must not be trusted as structurally complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub success: bool,
    pub midi: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub fixed: Vec<String>,
}

/// Per-call diagnostic accumulator.
///
/// Created fresh for every validation pass and threaded through each step,
/// so concurrent callers never share mutable state.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub fixed: Vec<String>,
}

impl Diagnostics {
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn fix(&mut self, message: impl Into<String>) {
        self.fixed.push(message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Close the pass with the corrected document text.
    pub fn into_report(self, midi: String) -> Report {
        Report {
            success: self.errors.is_empty(),
            midi,
            errors: self.errors,
            warnings: self.warnings,
            fixed: self.fixed,
        }
    }
}
