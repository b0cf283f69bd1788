//! Display formatting for engagement counters.

/// Abbreviate a counter for display.
///
/// Below 1000 the count is printed as-is. From 1000 up it is divided by
/// 1000, rounded half-up to one decimal, a trailing `.0` is dropped and `k`
/// is appended: `1500 -> "1.5k"`, `1999 -> "2k"`. There is no millions
/// suffix, so `1_250_000 -> "1250k"`.
pub fn format_count(count: i64) -> String {
    if count < 1000 {
        return count.to_string();
    }

    // Tenths of a thousand, rounded half-up in integer space.
    let tenths = count.saturating_add(50) / 100;
    let (whole, fraction) = (tenths / 10, tenths % 10);
    if fraction == 0 {
        format!("{}k", whole)
    } else {
        format!("{}.{}k", whole, fraction)
    }
}
