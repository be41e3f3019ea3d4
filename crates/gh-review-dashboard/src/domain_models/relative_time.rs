//! "n units ago" labels for pull request timestamps

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
// months are counted as 30 days
const MONTH: i64 = 30 * DAY;

/// Format how long ago `then` was, seen from `now`
///
/// Each unit is used below the next one: seconds under a minute, minutes
/// under an hour, hours under a day, days under 30 days, months beyond.
/// Values are floored. Timestamps in the future read "0 seconds ago".
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    let (count, unit) = if seconds < MINUTE {
        (seconds, "second")
    } else if seconds < HOUR {
        (seconds / MINUTE, "minute")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < MONTH {
        (seconds / DAY, "day")
    } else {
        (seconds / MONTH, "month")
    };

    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}
