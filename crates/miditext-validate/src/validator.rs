//! The auto-correction orchestrator.
//!
//! One pass over untrusted notation text: collect metadata, classify every
//! line, repair every pitch line against the grid, and assemble the
//! canonical document. The pass never fails on malformed content — it
//! always returns a best-effort document plus the full diagnostic trail.

use crate::classify::{classify, LineKind};
use crate::error::ValidateError;
use crate::inspect::{extract_metadata, MetadataSummary};
use crate::reconcile::reconcile;
use crate::report::{Diagnostics, Report};
use crate::symbol::validate_symbol;
use miditext_core::compress::{compress, expand};
use miditext_core::document::{Bar, Document, Metadata, PitchLine};
use miditext_core::grid;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Inputs shorter than this are rejected outright.
pub const MIN_INPUT_LEN: usize = 50;

/// How much of an unrecognized line its warning echoes.
const SNIPPET_LEN: usize = 50;

/// Validate untrusted notation text and auto-correct every structural
/// problem found.
///
/// Warnings and applied fixes never fail the pass; only an empty/too-short
/// input or an internal failure yields `success == false`, and in both of
/// those cases `midi` is the original text unchanged.
pub fn validate_and_fix(text: &str) -> Report {
    debug!(len = text.len(), "validating notation text");
    if text.len() < MIN_INPUT_LEN {
        warn!(len = text.len(), "input below minimum length");
        return Report {
            success: false,
            midi: text.to_string(),
            errors: vec![ValidateError::InputTooShort.to_string()],
            warnings: Vec::new(),
            fixed: Vec::new(),
        };
    }
    match catch_unwind(AssertUnwindSafe(|| run(text))) {
        Ok(report) => report,
        Err(payload) => {
            let message = panic_message(payload);
            warn!(error = %message, "validation pass failed internally");
            Report {
                success: false,
                midi: text.to_string(),
                errors: vec![ValidateError::Internal(message).to_string()],
                warnings: Vec::new(),
                fixed: Vec::new(),
            }
        }
    }
}

fn run(text: &str) -> Report {
    let mut diag = Diagnostics::default();
    let found = extract_metadata(text);
    let metadata = apply_defaults(&found, &mut diag);
    let expected = grid::subdivisions(&metadata.time_sig);

    let mut doc = Document {
        metadata,
        bars: Vec::new(),
    };
    let mut in_metadata = true;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();
        match classify(trimmed) {
            // Header values were already collected; the canonical header is
            // rendered from them. Blank separators are re-created on render.
            LineKind::Blank | LineKind::Metadata => {}
            LineKind::BarMarker(index) => {
                in_metadata = false;
                match index {
                    Some(index) => doc.bars.push(Bar {
                        index,
                        lines: Vec::new(),
                    }),
                    None => diag.warn(format!(
                        "Invalid bar marker at line {line_no}: {trimmed}"
                    )),
                }
            }
            LineKind::Pitch { pitch, body } => match doc.bars.last_mut() {
                Some(bar) => {
                    let index = bar.index;
                    if let Some(line) = fix_pitch_line(pitch, body, index, expected, &mut diag) {
                        bar.lines.push(line);
                    }
                }
                None => {
                    if !in_metadata {
                        diag.warn(unrecognized(line_no, trimmed));
                    }
                }
            },
            LineKind::VoiceLabel => diag.warn(format!(
                "Removed invalid voice label at line {line_no}: {trimmed}"
            )),
            LineKind::Formatting => diag.warn(format!("Removed formatting at line {line_no}")),
            LineKind::Other => {
                if !in_metadata {
                    diag.warn(unrecognized(line_no, trimmed));
                }
            }
        }
    }

    let midi = doc.render();
    diag.into_report(midi)
}

fn apply_defaults(found: &MetadataSummary, diag: &mut Diagnostics) -> Metadata {
    let mut metadata = Metadata::default();
    match found.tempo {
        Some(tempo) => metadata.tempo = tempo,
        None => diag.fix(format!("Added missing Tempo: {}", metadata.tempo)),
    }
    match &found.time_sig {
        Some(time_sig) => metadata.time_sig = time_sig.clone(),
        None => diag.fix(format!("Added missing TimeSig: {}", metadata.time_sig)),
    }
    match &found.key {
        Some(key) => metadata.key = key.clone(),
        None => diag.fix(format!("Added missing Key: {}", metadata.key)),
    }
    metadata
}

/// Run one pitch line through the repair pipeline:
/// expand -> reconcile -> validate symbols -> compress.
fn fix_pitch_line(
    pitch: &str,
    body: &str,
    bar: u32,
    expected: usize,
    diag: &mut Diagnostics,
) -> Option<PitchLine> {
    let symbols: Vec<String> = body.split_whitespace().map(str::to_string).collect();
    if symbols.is_empty() {
        diag.warn(format!("Empty pattern for {pitch} in bar {bar}"));
        return None;
    }
    let expanded = expand(&symbols);
    let reconciled = reconcile(expanded, expected, bar, pitch, diag);
    let validated: Vec<String> = reconciled
        .iter()
        .map(|symbol| validate_symbol(symbol, bar, pitch, diag))
        .collect();
    Some(PitchLine {
        pitch: pitch.to_string(),
        tokens: compress(&validated),
    })
}

fn unrecognized(line_no: usize, trimmed: &str) -> String {
    let snippet: String = trimmed.chars().take(SNIPPET_LEN).collect();
    format!("Unrecognized content at line {line_no}: {snippet}")
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "internal validation error".to_string()
    }
}
