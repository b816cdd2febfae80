//! The symbol grammar: one subdivision's worth of musical event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One token of a pitch line, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    /// `.` — silence for one subdivision.
    Rest,
    /// `~` or `~N` — continue the previous note, optionally cut off at N%
    /// of the slot.
    Sustain { cutoff: Option<u8> },
    /// `X`, `X80`, `X80XR10`, ... — note onset with optional velocity
    /// (1-127) and at most one timing modifier.
    NoteOn {
        velocity: Option<u8>,
        modifier: Modifier,
    },
    /// Text the grammar does not recognize, preserved verbatim.
    Unknown(String),
}

/// Timing modifier attached to a note onset. All values are percentages of
/// the subdivision slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    None,
    /// `XR<n>` — delay the onset by n%.
    RightOffset(u8),
    /// `XL<n>` — anticipate the onset by n%.
    LeftOffset(u8),
    /// `XO<n>XE<m>` — sound only the segment from n% lasting m%,
    /// with `n + m <= 100`.
    Positioned { offset: u8, duration: u8 },
    /// `E<n>` — cut the note after n%.
    Duration(u8),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Rest => f.write_str("."),
            Symbol::Sustain { cutoff: None } => f.write_str("~"),
            Symbol::Sustain { cutoff: Some(n) } => write!(f, "~{}", n),
            Symbol::NoteOn { velocity, modifier } => match (velocity, modifier) {
                (Some(v), m) => {
                    write!(f, "X{}", v)?;
                    write_modifier(f, m)
                }
                // Without a velocity the modifier marker itself carries
                // the onset's X.
                (None, Modifier::None) => f.write_str("X"),
                (None, Modifier::RightOffset(n)) => write!(f, "XR{}", n),
                (None, Modifier::LeftOffset(n)) => write!(f, "XL{}", n),
                (None, Modifier::Positioned { offset, duration }) => {
                    write!(f, "XO{}XE{}", offset, duration)
                }
                (None, Modifier::Duration(n)) => write!(f, "XE{}", n),
            },
            Symbol::Unknown(s) => f.write_str(s),
        }
    }
}

fn write_modifier(f: &mut fmt::Formatter<'_>, modifier: &Modifier) -> fmt::Result {
    match modifier {
        Modifier::None => Ok(()),
        Modifier::RightOffset(n) => write!(f, "XR{}", n),
        Modifier::LeftOffset(n) => write!(f, "XL{}", n),
        Modifier::Positioned { offset, duration } => write!(f, "XO{}XE{}", offset, duration),
        Modifier::Duration(n) => write!(f, "E{}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rest_and_sustain() {
        assert_eq!(Symbol::Rest.to_string(), ".");
        assert_eq!(Symbol::Sustain { cutoff: None }.to_string(), "~");
        assert_eq!(Symbol::Sustain { cutoff: Some(50) }.to_string(), "~50");
    }

    #[test]
    fn test_render_note_on() {
        let plain = Symbol::NoteOn {
            velocity: Some(80),
            modifier: Modifier::None,
        };
        assert_eq!(plain.to_string(), "X80");

        let offset = Symbol::NoteOn {
            velocity: Some(80),
            modifier: Modifier::RightOffset(10),
        };
        assert_eq!(offset.to_string(), "X80XR10");

        let duration = Symbol::NoteOn {
            velocity: Some(64),
            modifier: Modifier::Duration(50),
        };
        assert_eq!(duration.to_string(), "X64E50");
    }

    #[test]
    fn test_render_without_velocity() {
        let bare = Symbol::NoteOn {
            velocity: None,
            modifier: Modifier::None,
        };
        assert_eq!(bare.to_string(), "X");

        let positioned = Symbol::NoteOn {
            velocity: None,
            modifier: Modifier::Positioned {
                offset: 60,
                duration: 40,
            },
        };
        assert_eq!(positioned.to_string(), "XO60XE40");
    }

    #[test]
    fn test_render_unknown_verbatim() {
        assert_eq!(Symbol::Unknown("??".into()).to_string(), "??");
    }
}
