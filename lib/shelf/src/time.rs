use chrono::{Duration, Utc};

use crate::traits::Clock;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 4 * WEEK;
const YEAR: i64 = 12 * MONTH;

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Clock frozen at a given unix timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

pub fn timestamp_from_days_ago(now: i64, days: u32) -> i64 {
    now - Duration::days(i64::from(days)).num_seconds()
}

/// Renders the distance from `then` to `now` the way the feed displays it.
pub fn time_passed(now: i64, then: i64) -> String {
    let diff = now - then;

    if diff < 0 {
        return "in the future".to_string();
    }

    let (count, unit) = match diff {
        d if d < 15 => return "now".to_string(),
        d if d < MINUTE => (d, "second"),
        d if d < HOUR => (d / MINUTE, "minute"),
        d if d < DAY => (d / HOUR, "hour"),
        d if d < WEEK => (d / DAY, "day"),
        d if d < MONTH => (d / WEEK, "week"),
        d if d < YEAR => (d / MONTH, "month"),
        d => (d / YEAR, "year"),
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_passed_picks_largest_unit() {
        let now = 10_000_000;
        assert_eq!(time_passed(now, now), "now");
        assert_eq!(time_passed(now, now - 14), "now");
        assert_eq!(time_passed(now, now - 30), "30 seconds ago");
        assert_eq!(time_passed(now, now - 90), "1 minute ago");
        assert_eq!(time_passed(now, now - 5 * MINUTE), "5 minutes ago");
        assert_eq!(time_passed(now, now - HOUR), "1 hour ago");
        assert_eq!(time_passed(now, now - 3 * DAY - 5), "3 days ago");
        assert_eq!(time_passed(now, now - 2 * WEEK), "2 weeks ago");
        assert_eq!(time_passed(now, now - 5 * MONTH), "5 months ago");
        assert_eq!(time_passed(now, now - 2 * YEAR), "2 years ago");
        assert_eq!(time_passed(now, now + 100), "in the future");
    }

    #[test]
    fn days_ago_subtracts_whole_days() {
        assert_eq!(timestamp_from_days_ago(1_000_000, 0), 1_000_000);
        assert_eq!(timestamp_from_days_ago(1_000_000, 2), 1_000_000 - 2 * 86_400);
        assert_eq!(FixedClock(500_000).timestamp_from_days_ago(1), 500_000 - 86_400);
    }
}
