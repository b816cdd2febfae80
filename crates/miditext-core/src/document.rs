//! Structural model of a notation document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default tempo in BPM.
pub const DEFAULT_TEMPO: u32 = 120;
/// Default time signature.
pub const DEFAULT_TIME_SIG: &str = "4/4";
/// Default key.
pub const DEFAULT_KEY: &str = "C";

/// Document-level metadata. Exactly one value per field; fields the input
/// never states carry the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub tempo: u32,
    pub time_sig: String,
    pub key: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            tempo: DEFAULT_TEMPO,
            time_sig: DEFAULT_TIME_SIG.to_string(),
            key: DEFAULT_KEY.to_string(),
        }
    }
}

impl Metadata {
    /// The canonical header lines, always in Tempo/TimeSig/Key order.
    pub fn header_lines(&self) -> [String; 3] {
        [
            format!("Tempo: {}", self.tempo),
            format!("TimeSig: {}", self.time_sig),
            format!("Key: {}", self.key),
        ]
    }
}

/// The token sequence for one named pitch within one bar, in literal
/// (post-compression) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchLine {
    /// Pitch name as written: letter, optional accidental, octave (`C4`, `F#3`).
    pub pitch: String,
    pub tokens: Vec<String>,
}

impl fmt::Display for PitchLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pitch, self.tokens.join(" "))
    }
}

/// One measure. The index comes verbatim from the `Bar:` marker and is
/// never renumbered; duplicate indices stay separate bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub index: u32,
    pub lines: Vec<PitchLine>,
}

/// A structurally valid document: metadata, then bars in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: Metadata,
    pub bars: Vec<Bar>,
}

impl Document {
    /// Render the canonical text form: the three header lines, then each
    /// bar separated by a blank line, its marker first, its pitch lines in
    /// first-seen order.
    pub fn render(&self) -> String {
        let mut out: Vec<String> = self.metadata.header_lines().into();
        for bar in &self.bars {
            out.push(String::new());
            out.push(format!("Bar: {}", bar.index));
            for line in &bar.lines {
                out.push(line.to_string());
            }
        }
        out.join("\n")
    }
}
