/// Fatal failures of the validation engine.
///
/// Structural problems in the input never surface here; they are repaired
/// in place and reported through [`Report`](crate::Report). Only the two
/// fatal paths of the contract produce a `ValidateError`, and even those
/// are folded into the report rather than returned.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("MIDI text too short or empty")]
    InputTooShort,

    #[error("{0}")]
    Internal(String),
}
