use meet_profile::{ProfileRecord, RawProfile};

/// Select the roster entries eligible for display, in roster order.
///
/// An entry qualifies only when it carries a submitted `meet_info` whose
/// `show_profile` flag is explicitly true; everything else is dropped
/// silently. Pure and total: partial payloads are data, not errors.
pub fn eligible_records(roster: &[RawProfile]) -> Vec<ProfileRecord> {
    roster.iter().filter_map(ProfileRecord::from_raw).collect()
}
