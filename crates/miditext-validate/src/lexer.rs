//! Symbol-level tokenizer.
//!
//! Pitch-line bodies are whitespace-split upstream, so the lexer sees one
//! symbol at a time. Symbol letters are case-insensitive on input; the
//! canonical form is upper-case.

use logos::Logos;

/// Lexical pieces of one symbol.
///
/// The two-letter markers win over a bare `X` by longest match, so `XR10`
/// lexes as `[OffsetRight, Number(10)]` while `X80` lexes as
/// `[Onset, Number(80)]`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolToken {
    #[token(".")]
    Rest,

    #[token("~")]
    Sustain,

    #[regex(r"[Xx][Rr]")]
    OffsetRight,

    #[regex(r"[Xx][Ll]")]
    OffsetLeft,

    #[regex(r"[Xx][Oo]")]
    SegmentOffset,

    #[regex(r"[Xx][Ee]")]
    SegmentEnd,

    #[regex(r"[Xx]")]
    Onset,

    #[regex(r"[Ee]")]
    Duration,

    // Overlong digit strings saturate instead of failing the whole symbol;
    // range clamping catches them later.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().unwrap_or(u64::MAX))]
    Number(u64),
}

/// Tokenize one symbol string. `None` means some character falls outside
/// the symbol alphabet — callers treat the whole symbol as unrecognized.
pub fn tokenize(symbol: &str) -> Option<Vec<SymbolToken>> {
    let mut tokens = Vec::new();
    for result in SymbolToken::lexer(symbol) {
        tokens.push(result.ok()?);
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use SymbolToken::*;

    #[test]
    fn test_lex_rest_and_sustain() {
        assert_eq!(tokenize("."), Some(vec![Rest]));
        assert_eq!(tokenize("~"), Some(vec![Sustain]));
        assert_eq!(tokenize("~50"), Some(vec![Sustain, Number(50)]));
    }

    #[test]
    fn test_lex_note_on() {
        assert_eq!(tokenize("X80"), Some(vec![Onset, Number(80)]));
        assert_eq!(
            tokenize("X80XR10"),
            Some(vec![Onset, Number(80), OffsetRight, Number(10)])
        );
        assert_eq!(
            tokenize("XO60XE70"),
            Some(vec![SegmentOffset, Number(60), SegmentEnd, Number(70)])
        );
        assert_eq!(
            tokenize("X64E50"),
            Some(vec![Onset, Number(64), Duration, Number(50)])
        );
    }

    #[test]
    fn test_lex_case_insensitive() {
        assert_eq!(tokenize("x80"), Some(vec![Onset, Number(80)]));
        assert_eq!(
            tokenize("x80xl25"),
            Some(vec![Onset, Number(80), OffsetLeft, Number(25)])
        );
    }

    #[test]
    fn test_lex_longest_match_wins() {
        assert_eq!(tokenize("XR10"), Some(vec![OffsetRight, Number(10)]));
        assert_eq!(tokenize("XE50"), Some(vec![SegmentEnd, Number(50)]));
    }

    #[test]
    fn test_lex_rejects_foreign_characters() {
        assert_eq!(tokenize("QQ"), None);
        assert_eq!(tokenize("X80?"), None);
    }

    #[test]
    fn test_lex_saturates_huge_numbers() {
        assert_eq!(
            tokenize("X99999999999999999999"),
            Some(vec![Onset, Number(u64::MAX)])
        );
    }
}
