use lazy_static::lazy_static;
use regex::Regex;

/// Text substituted when a posting carries no posted time at all.
pub const UNKNOWN_TIME: &str = "Unknown Time";

lazy_static! {
    static ref POSTED_PATTERN: Regex =
        Regex::new(r"([0-9]+)\s([A-Za-z0-9_]+)").expect("posted pattern is valid");
}

/// Minutes per unit word, matched against the lowercased literal word.
///
/// Only the singular forms are known. "hours" or "days" miss the lookup and
/// count with a multiplier of 1, so "2 hours" yields 2 rather than 120.
fn unit_multiplier(unit: &str) -> u64 {
    match unit.to_lowercase().as_str() {
        "minute" => 1,
        "hour" => 60,
        "day" => 1440,
        _ => 1,
    }
}

/// Converts free text like "3 hour ago" into elapsed minutes.
///
/// The first `<integer><whitespace><word>` run in the text is used. Text with
/// no such run yields 0.
pub fn normalize_posted(posted: &str) -> u64 {
    let Some(caps) = POSTED_PATTERN.captures(posted) else {
        return 0;
    };
    let value = caps[1].parse::<u64>().unwrap_or(u64::MAX);
    value.saturating_mul(unit_multiplier(&caps[2]))
}
