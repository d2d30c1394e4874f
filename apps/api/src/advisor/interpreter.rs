//! Response Interpreter — pulls the numeric rating out of free-text analysis.
//!
//! Malformed output never fails: no usable `Rating:` line means rating 0.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// ASCII digits only: `\d` would also match non-ASCII digits that `i64::from_str` rejects.
fn rating_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Rating:\s*(-?[0-9]+)").expect("rating pattern is valid"))
}

/// First `Rating: N` in the text, unclamped. Returns 0 when there is no match
/// or the number does not fit an `i64`.
pub fn parse_rating(text: &str) -> i64 {
    let Some(captures) = rating_pattern().captures(text) else {
        warn!("No 'Rating:' line in analysis output; defaulting rating to 0");
        return 0;
    };

    match captures[1].parse::<i64>() {
        Ok(rating) => rating,
        Err(e) => {
            warn!("Unparseable rating '{}': {e}; defaulting to 0", &captures[1]);
            0
        }
    }
}
