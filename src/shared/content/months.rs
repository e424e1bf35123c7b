//! The single month-name lookup table.
//!
//! Every list that sorts by "year desc, then month desc" maps month names
//! through this ordinal; keeping one table guarantees the admin and public
//! orderings can never drift apart.

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 1-based ordinal for a month name, case-insensitive. `None` for anything
/// that is not a month.
pub fn ordinal(name: &str) -> Option<u8> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| (i + 1) as u8)
}

pub fn is_valid(name: &str) -> bool {
    ordinal(name).is_some()
}

/// Sort key for optional month fields; unset or unknown months sort last
/// within their year on a descending sort.
pub fn ordinal_or_zero(name: Option<&str>) -> u8 {
    name.and_then(ordinal).unwrap_or(0)
}
