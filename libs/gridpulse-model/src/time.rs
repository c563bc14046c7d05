//! Timestamp convention helpers
//!
//! Datapoint datetimes mark the *start* of the measurement interval.
//! Several upstream sources stamp the *end* instead; their timestamps
//! must be shifted back by one interval at the adapter boundary.

use chrono::{DateTime, Duration, Utc};

/// Convert an interval-end timestamp to the interval-start convention.
///
/// # Examples
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use gridpulse_model::interval_start;
///
/// // An hourly sample stamped 13:00 covers the 12:00-13:00 interval
/// let end = Utc.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap();
/// let start = interval_start(end, Duration::hours(1));
/// assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
/// ```
pub fn interval_start(interval_end: DateTime<Utc>, interval: Duration) -> DateTime<Utc> {
    interval_end - interval
}
