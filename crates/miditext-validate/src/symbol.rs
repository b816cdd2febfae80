//! Symbol parsing and range clamping.
//!
//! Every numeric field is forced into its declared range rather than
//! rejected; each clamp is recorded as a warning naming the bar, the pitch,
//! and the offending value. Text the grammar cannot place is preserved
//! verbatim as [`Symbol::Unknown`] — unknown content is never dropped.

use crate::lexer::{tokenize, SymbolToken as T};
use crate::report::Diagnostics;
use miditext_core::compress::split_compressed;
use miditext_core::symbol::{Modifier, Symbol};

pub const MIN_VELOCITY: u64 = 1;
pub const MAX_VELOCITY: u64 = 127;
pub const MAX_PERCENT: u64 = 100;

/// Validate one (possibly compression-wrapped) token, returning its
/// canonical text.
pub fn validate_symbol(raw: &str, bar: u32, pitch: &str, diag: &mut Diagnostics) -> String {
    if let Some((base, count)) = split_compressed(raw) {
        let count = if count < 1 {
            diag.warn(format!(
                "Bar {bar} {pitch}: Invalid compression count {count}, fixing to 1"
            ));
            1
        } else {
            count
        };
        let validated = parse_symbol(base, bar, pitch, diag).to_string();
        return format!("{validated}({count})");
    }
    parse_symbol(raw, bar, pitch, diag).to_string()
}

/// Parse one expanded token against the symbol grammar, clamping numeric
/// fields into range.
pub fn parse_symbol(raw: &str, bar: u32, pitch: &str, diag: &mut Diagnostics) -> Symbol {
    let Some(tokens) = tokenize(raw) else {
        return unknown(raw, bar, pitch, diag);
    };

    match tokens.as_slice() {
        [T::Rest] => Symbol::Rest,
        [T::Sustain] => Symbol::Sustain { cutoff: None },
        [T::Sustain, T::Number(n)] => Symbol::Sustain {
            cutoff: Some(clamp_percent(*n, "Sustain cutoff", bar, pitch, diag)),
        },
        [T::Onset, T::Number(v), rest @ ..] => match parse_modifier(rest, bar, pitch, diag) {
            Some(modifier) => Symbol::NoteOn {
                velocity: Some(clamp_velocity(*v, bar, pitch, diag)),
                modifier,
            },
            None => unknown(raw, bar, pitch, diag),
        },
        [T::Onset, rest @ ..] => match parse_modifier(rest, bar, pitch, diag) {
            Some(modifier) => Symbol::NoteOn {
                velocity: None,
                modifier,
            },
            None => unknown(raw, bar, pitch, diag),
        },
        // Modifier markers fuse the onset's X, so a symbol may start with
        // one directly: `XR10`, `XO60XE40`, `XE50`.
        rest @ ([T::OffsetRight, ..] | [T::OffsetLeft, ..] | [T::SegmentOffset, ..] | [T::SegmentEnd, ..]) => {
            match parse_modifier(rest, bar, pitch, diag) {
                Some(modifier) => Symbol::NoteOn {
                    velocity: None,
                    modifier,
                },
                None => unknown(raw, bar, pitch, diag),
            }
        }
        _ => unknown(raw, bar, pitch, diag),
    }
}

/// Parse the modifier tail of a note-on. `None` means the tail is not a
/// single well-formed modifier, in which case no warning has been emitted
/// yet and the caller falls back to `Unknown`.
fn parse_modifier(
    tokens: &[T],
    bar: u32,
    pitch: &str,
    diag: &mut Diagnostics,
) -> Option<Modifier> {
    match tokens {
        [] => Some(Modifier::None),
        [T::OffsetRight, T::Number(n)] => Some(Modifier::RightOffset(clamp_percent(
            *n, "XR offset", bar, pitch, diag,
        ))),
        [T::OffsetLeft, T::Number(n)] => Some(Modifier::LeftOffset(clamp_percent(
            *n, "XL offset", bar, pitch, diag,
        ))),
        [T::SegmentOffset, T::Number(o), T::SegmentEnd, T::Number(d)] => {
            let offset = clamp_percent(*o, "XO offset", bar, pitch, diag);
            let mut duration = clamp_percent(*d, "XE duration", bar, pitch, diag);
            if u32::from(offset) + u32::from(duration) > 100 {
                diag.warn(format!(
                    "Bar {bar} {pitch}: XO{offset}XE{duration} exceeds 100%, adjusting"
                ));
                duration = 100 - offset;
            }
            Some(Modifier::Positioned { offset, duration })
        }
        [T::Duration, T::Number(n)] | [T::SegmentEnd, T::Number(n)] => Some(Modifier::Duration(
            clamp_percent(*n, "Duration", bar, pitch, diag),
        )),
        _ => None,
    }
}

fn clamp_velocity(value: u64, bar: u32, pitch: &str, diag: &mut Diagnostics) -> u8 {
    if (MIN_VELOCITY..=MAX_VELOCITY).contains(&value) {
        return value as u8;
    }
    diag.warn(format!(
        "Bar {bar} {pitch}: Velocity {value} out of range, clamping to 1-127"
    ));
    value.clamp(MIN_VELOCITY, MAX_VELOCITY) as u8
}

fn clamp_percent(value: u64, what: &str, bar: u32, pitch: &str, diag: &mut Diagnostics) -> u8 {
    if value <= MAX_PERCENT {
        return value as u8;
    }
    diag.warn(format!(
        "Bar {bar} {pitch}: {what} {value} out of range, clamping to 0-100"
    ));
    MAX_PERCENT as u8
}

fn unknown(raw: &str, bar: u32, pitch: &str, diag: &mut Diagnostics) -> Symbol {
    diag.warn(format!("Bar {bar} {pitch}: Unrecognized symbol {raw}"));
    Symbol::Unknown(raw.to_string())
}
