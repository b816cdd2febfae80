//! Presence checks and statistics. Nothing here modifies the input.

use crate::classify::pitch_header_len;
use miditext_core::compress::expand;
use serde::{Deserialize, Serialize};

/// Presence summary from [`quick_validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReport {
    pub valid: bool,
    pub has_tempo: bool,
    pub has_time_sig: bool,
    pub has_key: bool,
    pub has_bars: bool,
    pub has_notes: bool,
}

/// Metadata values found in a document, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetadataSummary {
    pub tempo: Option<u32>,
    pub time_sig: Option<String>,
    pub key: Option<String>,
}

/// Aggregate statistics over one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub bars: usize,
    pub voices: usize,
    pub has_compression: bool,
    pub compression_ratio: f64,
}

/// Check which structural ingredients are present, without correcting
/// anything. `valid` means all five are there.
pub fn quick_validate(text: &str) -> QuickReport {
    let has_tempo = text.contains("Tempo:");
    let has_time_sig = text.contains("TimeSig:");
    let has_key = text.contains("Key:");
    let has_bars = text.contains("Bar:");
    let has_notes = count_voices(text) > 0;
    QuickReport {
        valid: has_tempo && has_time_sig && has_key && has_bars && has_notes,
        has_tempo,
        has_time_sig,
        has_key,
        has_bars,
        has_notes,
    }
}

/// Count `Bar:` markers.
pub fn count_bars(text: &str) -> usize {
    text.matches("Bar:").count()
}

/// Count pitch-line headers anywhere in the text.
pub fn count_voices(text: &str) -> usize {
    let mut count = 0;
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(len) = pitch_header_len(rest, false) {
            count += 1;
            rest = &rest[len..];
        } else {
            let step = rest.chars().next().map_or(1, char::len_utf8);
            rest = &rest[step..];
        }
    }
    count
}

/// Collect the first `Tempo:`, `TimeSig:`, and `Key:` values. Malformed
/// values are treated as absent.
pub fn extract_metadata(text: &str) -> MetadataSummary {
    let mut meta = MetadataSummary::default();
    for line in text.lines() {
        let trimmed = line.trim();
        if meta.tempo.is_none() {
            if let Some(rest) = trimmed.strip_prefix("Tempo:") {
                meta.tempo = parse_number_value(rest);
            }
        }
        if meta.time_sig.is_none() {
            if let Some(rest) = trimmed.strip_prefix("TimeSig:") {
                meta.time_sig = parse_time_sig_value(rest);
            }
        }
        if meta.key.is_none() {
            if let Some(rest) = trimmed.strip_prefix("Key:") {
                meta.key = parse_key_value(rest);
            }
        }
    }
    meta
}

/// Whether any `base(count)` notation occurs in the text.
pub fn has_compression(text: &str) -> bool {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'(' {
            continue;
        }
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 && bytes.get(j) == Some(&b')') {
            return true;
        }
    }
    false
}

/// Percentage of token slots saved by compression across all pitch lines,
/// rounded to one decimal. 0.0 when the document has no expanded tokens.
pub fn compression_ratio(text: &str) -> f64 {
    let mut literal = 0usize;
    let mut expanded_total = 0usize;
    for line in text.lines() {
        let Some(len) = pitch_header_len(line, true) else {
            continue;
        };
        let symbols: Vec<String> = line[len..].split_whitespace().map(str::to_string).collect();
        literal += symbols.len();
        expanded_total += expand(&symbols).len();
    }
    if expanded_total == 0 {
        return 0.0;
    }
    let ratio = (1.0 - literal as f64 / expanded_total as f64) * 100.0;
    (ratio * 10.0).round() / 10.0
}

/// Bundle the counters into one value for reporting.
pub fn stats(text: &str) -> Stats {
    Stats {
        bars: count_bars(text),
        voices: count_voices(text),
        has_compression: has_compression(text),
        compression_ratio: compression_ratio(text),
    }
}

fn parse_number_value(rest: &str) -> Option<u32> {
    let rest = rest.trim_start();
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse().ok()
}

fn parse_time_sig_value(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    let bytes = rest.as_bytes();
    let num = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if num == 0 || bytes.get(num) != Some(&b'/') {
        return None;
    }
    let den = bytes[num + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if den == 0 {
        return None;
    }
    Some(rest[..num + 1 + den].to_string())
}

fn parse_key_value(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    let bytes = rest.as_bytes();
    let first = *bytes.first()?;
    if !matches!(first, b'A'..=b'G' | b'a'..=b'g') {
        return None;
    }
    let len = if matches!(bytes.get(1), Some(b'#') | Some(b'b')) {
        2
    } else {
        1
    };
    Some(rest[..len].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Tempo: 96\nTimeSig: 3/4\nKey: Eb\n\nBar: 1\nC4: X80 .(11)\nE4: .(12)\n\nBar: 2\nC4: X80 .(11)\n";

    #[test]
    fn test_quick_validate_complete_document() {
        let report = quick_validate(DOC);
        assert!(report.valid);
        assert!(report.has_tempo && report.has_time_sig && report.has_key);
        assert!(report.has_bars && report.has_notes);
    }

    #[test]
    fn test_quick_validate_missing_pieces() {
        let report = quick_validate("TimeSig: 4/4\nBar: 1\n");
        assert!(!report.valid);
        assert!(!report.has_tempo);
        assert!(report.has_time_sig);
        assert!(report.has_bars);
        assert!(!report.has_notes);
    }

    #[test]
    fn test_count_bars_and_voices() {
        assert_eq!(count_bars(DOC), 2);
        assert_eq!(count_voices(DOC), 3);
        assert_eq!(count_bars(""), 0);
    }

    #[test]
    fn test_count_voices_is_case_sensitive() {
        assert_eq!(count_voices("c4: X80"), 0);
        assert_eq!(count_voices("C4: X80"), 1);
    }

    #[test]
    fn test_extract_metadata() {
        let meta = extract_metadata(DOC);
        assert_eq!(meta.tempo, Some(96));
        assert_eq!(meta.time_sig.as_deref(), Some("3/4"));
        assert_eq!(meta.key.as_deref(), Some("Eb"));
    }

    #[test]
    fn test_extract_metadata_first_occurrence_wins() {
        let meta = extract_metadata("Tempo: 90\nTempo: 140\n");
        assert_eq!(meta.tempo, Some(90));
    }

    #[test]
    fn test_extract_metadata_malformed_is_absent() {
        let meta = extract_metadata("Tempo: allegro\nTimeSig: fast\nKey: 7\n");
        assert_eq!(meta.tempo, None);
        assert_eq!(meta.time_sig, None);
        assert_eq!(meta.key, None);
    }

    #[test]
    fn test_has_compression() {
        assert!(has_compression("C4: .(12)"));
        assert!(!has_compression("C4: . . . ."));
        assert!(!has_compression("C4: .()"));
    }

    #[test]
    fn test_compression_ratio() {
        // 2 literal tokens expand to 16: 1 - 2/16 = 87.5%
        assert_eq!(compression_ratio("C4: X80 .(15)"), 87.5);
        assert_eq!(compression_ratio("no pitch lines here"), 0.0);
    }
}
