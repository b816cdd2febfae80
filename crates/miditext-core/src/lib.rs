//! Core types and utilities for the miditext notation
//!
//! miditext is a compact, line-oriented text notation for musical
//! compositions: metadata lines (`Tempo:`, `TimeSig:`, `Key:`), bar markers
//! (`Bar: 1`), and per-pitch symbol sequences (`C4: X80 ~ ~ ~ .(12)`).
//! This crate provides the data model, the run-length compression codec,
//! and the grid calculation shared by the tools that read and write it.
//!
//! # Examples
//!
//! ```
//! use miditext_core::{compress, expand, subdivisions};
//!
//! // One bar of 4/4 holds 16 token slots
//! assert_eq!(subdivisions("4/4"), 16);
//!
//! // Compression is presentation only
//! let tokens: Vec<String> = vec!["X80".into(), ".".into(), ".".into(), ".".into()];
//! let packed = compress(&tokens);
//! assert_eq!(packed, vec!["X80".to_string(), ".(3)".to_string()]);
//! assert_eq!(expand(&packed), tokens);
//! ```
//!
//! # Main Components
//!
//! - **Symbol**: one subdivision's worth of musical event
//! - **Document / Bar / PitchLine**: the structural model
//! - **compress / expand**: the `base(count)` run-length codec
//! - **subdivisions**: token slots per bar for a time signature

pub mod compress;
pub mod document;
pub mod grid;
pub mod symbol;

pub use compress::{compress, compress_runs, expand, split_compressed, CompressedToken};
pub use document::{Bar, Document, Metadata, PitchLine, DEFAULT_KEY, DEFAULT_TEMPO, DEFAULT_TIME_SIG};
pub use grid::{parse_time_sig, subdivisions, DEFAULT_SUBDIVISIONS};
pub use symbol::{Modifier, Symbol};
