//! Token-count reconciliation against the bar grid.

use crate::report::Diagnostics;

/// The rest token used for padding.
pub const REST: &str = ".";

/// Pad or truncate an expanded token sequence to exactly `expected` slots.
///
/// Both repairs record a warning plus a fixed entry; an already-correct
/// sequence passes through untouched.
pub fn reconcile(
    mut expanded: Vec<String>,
    expected: usize,
    bar: u32,
    pitch: &str,
    diag: &mut Diagnostics,
) -> Vec<String> {
    let got = expanded.len();
    if got == expected {
        return expanded;
    }
    diag.warn(format!(
        "Bar {bar} {pitch}: Expected {expected} subdivisions (when expanded), got {got}"
    ));
    if got < expected {
        let needed = expected - got;
        expanded.resize(expected, REST.to_string());
        diag.fix(format!(
            "Bar {bar} {pitch}: Added {needed} rest subdivision(s) to reach {expected}"
        ));
    } else {
        let excess = got - expected;
        expanded.truncate(expected);
        diag.fix(format!(
            "Bar {bar} {pitch}: Removed {excess} excess subdivisions"
        ));
    }
    expanded
}
