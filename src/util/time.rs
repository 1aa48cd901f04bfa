//! Season date calculation utilities.

use chrono::{DateTime, Datelike, Utc};

/// First month (1-based) of a new European football season.
pub const SEASON_START_MONTH: u32 = 7;

/// Calculates the football-data.org season year that is current at `now`.
///
/// football-data.org identifies a season by the year it starts in. European leagues start
/// in August, so from July onwards the current calendar year is used, before that the
/// previous one.
///
/// # Example
/// ```ignore
/// // 2026-03-14 is still in the 2025/26 season
/// let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
/// assert_eq!(current_season_year(now), 2025);
/// ```
pub fn current_season_year(now: DateTime<Utc>) -> i32 {
    if now.month() >= SEASON_START_MONTH {
        now.year()
    } else {
        now.year() - 1
    }
}
