//! Run-length compression codec for token sequences.
//!
//! `base(count)` is shorthand for `count` repeated identical tokens. It is
//! a presentation-only optimization: an expanded sequence and its compressed
//! form mean exactly the same thing.

use serde::{Deserialize, Serialize};

/// Longest run a single `base(count)` token may claim. Input is untrusted,
/// so expansion clips anything past this.
pub const MAX_RUN: usize = 4096;

/// Minimum run length worth collapsing to `base(count)` form.
pub const MIN_COMPRESS_RUN: usize = 3;

/// A run of identical tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedToken {
    pub base: String,
    pub count: usize,
}

/// Split a `base(count)` token into its parts, if it is one.
pub fn split_compressed(token: &str) -> Option<(&str, usize)> {
    let rest = token.strip_suffix(')')?;
    let open = rest.rfind('(')?;
    let (base, digits) = rest.split_at(open);
    let digits = &digits[1..];
    if base.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count = digits.parse().unwrap_or(MAX_RUN);
    Some((base, count))
}

/// Expand every `base(count)` token to `count` repetitions of `base`.
/// All other tokens pass through, so already-expanded input is unchanged.
pub fn expand(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        match split_compressed(token) {
            Some((base, count)) => {
                for _ in 0..count.min(MAX_RUN) {
                    out.push(base.to_string());
                }
            }
            None => out.push(token.clone()),
        }
    }
    out
}

/// Scan a pre-expanded sequence into runs of identical tokens.
pub fn compress_runs(tokens: &[String]) -> Vec<CompressedToken> {
    let mut runs: Vec<CompressedToken> = Vec::new();
    for token in tokens {
        match runs.last_mut() {
            Some(run) if run.base == *token => run.count += 1,
            _ => runs.push(CompressedToken {
                base: token.clone(),
                count: 1,
            }),
        }
    }
    runs
}

/// Collapse runs of length >= 3 to `base(count)`; shorter runs stay literal.
pub fn compress(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for run in compress_runs(tokens) {
        if run.count >= MIN_COMPRESS_RUN {
            out.push(format!("{}({})", run.base, run.count));
        } else {
            for _ in 0..run.count {
                out.push(run.base.clone());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toks(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expand_basic() {
        assert_eq!(expand(&toks(&[".(4)"])), toks(&[".", ".", ".", "."]));
        assert_eq!(expand(&toks(&["X80", "~(2)"])), toks(&["X80", "~", "~"]));
    }

    #[test]
    fn test_expand_idempotent_on_expanded() {
        let expanded = toks(&["X80", "~", "~", "."]);
        assert_eq!(expand(&expanded), expanded);
    }

    #[test]
    fn test_expand_zero_count() {
        assert_eq!(expand(&toks(&[".(0)", "X80"])), toks(&["X80"]));
    }

    #[test]
    fn test_expand_clips_absurd_counts() {
        let out = expand(&toks(&[".(999999999)"]));
        assert_eq!(out.len(), MAX_RUN);
    }

    #[test]
    fn test_split_compressed() {
        assert_eq!(split_compressed("X80(3)"), Some(("X80", 3)));
        assert_eq!(split_compressed(".(12)"), Some((".", 12)));
        assert_eq!(split_compressed("X80"), None);
        assert_eq!(split_compressed("(3)"), None);
        assert_eq!(split_compressed("X(a)"), None);
    }

    #[test]
    fn test_compress_long_run() {
        assert_eq!(compress(&toks(&["X", "X", "X", "X"])), toks(&["X(4)"]));
    }

    #[test]
    fn test_compress_short_run_stays_literal() {
        assert_eq!(compress(&toks(&["X", "X", "."])), toks(&["X", "X", "."]));
    }

    #[test]
    fn test_compress_mixed_runs() {
        let input = toks(&["X80", ".", ".", ".", "~", "~"]);
        assert_eq!(compress(&input), toks(&["X80", ".(3)", "~", "~"]));
    }

    #[test]
    fn test_compress_runs_counts() {
        let runs = compress_runs(&toks(&[".", ".", "X80", "."]));
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].count, 2);
        assert_eq!(runs[1].base, "X80");
        assert_eq!(runs[2].count, 1);
    }

    fn token_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec![".", "~", "~50", "X80", "X64", "X127XR10"])
            .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn roundtrip_expand_compress(tokens in prop::collection::vec(token_strategy(), 0..64)) {
            let compressed = compress(&tokens);
            prop_assert_eq!(expand(&compressed), tokens);
        }
    }
}
