//! Validation and auto-correction engine for the miditext notation
//!
//! The text comes from a generative model, so it is untrusted: token counts
//! drift, numeric fields run out of range, and prose or markdown leaks in
//! between the music. This crate parses such a document, repairs every
//! structural violation deterministically (padding/truncating token counts,
//! clamping numbers, dropping disallowed lines), and reports every
//! correction it made. It never fails on malformed content — the result is
//! always a best-effort canonical document plus a diagnostic trail.
//!
//! # Examples
//!
//! ```
//! use miditext_validate::validate_and_fix;
//!
//! let report = validate_and_fix("Tempo: 120\nTimeSig: 4/4\nKey: C\n\nBar: 1\nC4: X80 ~ ~ ~ .(12)\n");
//! assert!(report.success);
//! assert!(report.warnings.is_empty());
//! ```
//!
//! # Main Functions
//!
//! - [`validate_and_fix`]: full validation and auto-correction
//! - [`quick_validate`]: presence checks only, no correction
//! - [`extract_metadata`], [`count_bars`], [`count_voices`]: inspection
//! - [`has_compression`], [`compression_ratio`]: compression statistics

pub mod classify;
pub mod error;
pub mod inspect;
pub mod lexer;
pub mod reconcile;
pub mod report;
pub mod symbol;
pub mod validator;


pub use classify::{classify, LineKind};
pub use error::ValidateError;
pub use inspect::{
    compression_ratio, count_bars, count_voices, extract_metadata, has_compression,
    quick_validate, stats, MetadataSummary, QuickReport, Stats,
};
pub use lexer::{tokenize, SymbolToken};
pub use report::{Diagnostics, Report};
pub use symbol::{parse_symbol, validate_symbol};
pub use validator::{validate_and_fix, MIN_INPUT_LEN};
