//! Line classification for the two-region document state machine.
//!
//! Classification itself is stateless; the orchestrator owns the
//! METADATA/BODY state and decides what each kind means where it appears.

/// What one trimmed input line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `Tempo:` / `TimeSig:` / `Key:` line. Kept only in the metadata region.
    Metadata,
    /// `Bar:` marker with its parsed index; `None` when no index parses.
    BarMarker(Option<u32>),
    /// Pitch-line header plus the raw token region after the colon.
    Pitch { pitch: &'a str, body: &'a str },
    /// `V1:` / `Voice2:` labels the producer sometimes invents.
    VoiceLabel,
    /// Markdown headings, rules, emphasis, code fences.
    Formatting,
    Other,
}

/// Fixed, case-sensitive metadata prefixes — the wire format.
pub const METADATA_PREFIXES: [&str; 3] = ["Tempo:", "TimeSig:", "Key:"];

/// Classify one already-trimmed line.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if METADATA_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return LineKind::Metadata;
    }
    if let Some(rest) = line.strip_prefix("Bar:") {
        return LineKind::BarMarker(parse_bar_index(rest));
    }
    if let Some(len) = pitch_header_len(line, true) {
        return LineKind::Pitch {
            pitch: &line[..len - 1],
            body: &line[len..],
        };
    }
    if is_voice_label(line) {
        return LineKind::VoiceLabel;
    }
    if is_formatting(line) {
        return LineKind::Formatting;
    }
    LineKind::Other
}

/// Match a pitch-line header (`[A-G][#b]?-?\d+:`) at the start of `s`,
/// returning the matched length including the colon. The pitch letter is
/// matched case-insensitively when `lowercase_letter_ok` is set; the
/// presence scanners in `inspect` use the strict form.
pub fn pitch_header_len(s: &str, lowercase_letter_ok: bool) -> Option<usize> {
    let bytes = s.as_bytes();
    let first = *bytes.first()?;
    let is_letter =
        matches!(first, b'A'..=b'G') || (lowercase_letter_ok && matches!(first, b'a'..=b'g'));
    if !is_letter {
        return None;
    }
    let mut i = 1;
    if matches!(bytes.get(i), Some(b'#') | Some(b'b')) {
        i += 1;
    }
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    let digits_start = i;
    while matches!(bytes.get(i), Some(b'0'..=b'9')) {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    if bytes.get(i) == Some(&b':') {
        Some(i + 1)
    } else {
        None
    }
}

fn parse_bar_index(rest: &str) -> Option<u32> {
    let rest = rest.trim_start();
    let digits = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse().ok()
}

fn is_voice_label(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    let rest = if let Some(rest) = lower.strip_prefix("voice") {
        rest
    } else if let Some(rest) = lower.strip_prefix('v') {
        rest
    } else {
        return false;
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    digits > 0 && rest.as_bytes().get(digits) == Some(&b':')
}

fn is_formatting(line: &str) -> bool {
    matches!(
        line.as_bytes().first(),
        Some(b'#') | Some(b'-') | Some(b'=') | Some(b'*') | Some(b'_')
    ) || line.contains("```")
}
