use once_cell::sync::Lazy;
use regex::Regex;

/// `GMT`, a space, a sign, then HHMM with hours 00-19 and minutes 00-59.
static GMT_OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GMT [+-][0-1][0-9][0-5][0-9]$").expect("valid offset pattern"));

/// Whether `value` is a well-formed GMT offset, e.g. `GMT +0800` or
/// `GMT -1130`.
///
/// Submission of a profile is blocked on mismatch; nothing downstream of the
/// form ever sees an invalid offset.
pub fn is_valid_gmt_offset(value: &str) -> bool {
    GMT_OFFSET.is_match(value)
}
