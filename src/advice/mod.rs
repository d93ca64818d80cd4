//! Recommendation and summary text derived from metrics and clearance results.

use crate::config::Limits;
use crate::input::RoomSpec;

/// Ordered suggestions; every rule is evaluated on the unrounded open-space percent.
pub fn recommendations(
    room: &RoomSpec,
    open_space_percent: f64,
    issues: &[String],
    limits: &Limits,
) -> Vec<String> {
    let mut out = Vec::new();

    if open_space_percent < limits.crowded_percent {
        out.push(format!(
            "Consider reducing furniture - less than {}% open space",
            limits.crowded_percent
        ));
    } else if open_space_percent > limits.spacious_percent {
        out.push("Room has extra space - could add accent pieces".to_string());
    }

    if room.is_long_narrow(limits.long_room_ratio) {
        out.push("Long narrow room - create zones".to_string());
    }

    if issues.is_empty() {
        out.push(format!(
            "Layout is feasible - maintain {}-{}\" walkways",
            limits.walkway_min_in, limits.walkway_preferred_in
        ));
    } else {
        out.push("Layout issues detected - see issues list".to_string());
    }

    out
}

/// One-line verdict. The percent is rounded half-to-even to a whole number.
pub fn summary(layout_valid: bool, open_space_percent: f64, issue_count: usize) -> String {
    if !layout_valid {
        return format!("Layout NOT feasible - {issue_count} issue(s) found.");
    }

    // `+ 0.0` turns a rounded -0 into 0.
    let whole = open_space_percent.round_ties_even() + 0.0;
    if open_space_percent >= 60.0 {
        format!("Layout VALIDATED - {whole}% open space.")
    } else if open_space_percent >= 50.0 {
        format!("Layout FEASIBLE - {whole}% open space.")
    } else {
        format!("Layout POSSIBLE but tight - {whole}% open space.")
    }
}
