use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};

/// The big day: December 12th, 2026, midnight UTC.
pub fn wedding_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 12, 12, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Whole days, hours, and minutes until a target instant, truncated
/// toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

pub fn time_until(now: DateTime<Utc>, target: DateTime<Utc>) -> TimeRemaining {
    let delta = target - now;
    let days = delta.num_days();
    let hours = delta.num_hours() - days * 24;
    let minutes = delta.num_minutes() - delta.num_hours() * 60;
    TimeRemaining {
        days,
        hours,
        minutes,
    }
}

/// The countdown line sent to chats, both on demand and on schedule.
pub fn countdown_message(now: DateTime<Utc>) -> String {
    let remaining = time_until(now, wedding_date());
    format!(
        "The wedding is in {} days, {} hours, and {} minutes!",
        remaining.days, remaining.hours, remaining.minutes
    )
}

/// Calendar policy for the automatic countdown post:
/// - more than 30 days out, post monthly on the 1st;
/// - between 8 and 30 days out, post weekly on Mondays;
/// - in the final week, post every day.
pub fn should_post_countdown(now: DateTime<Utc>, target: DateTime<Utc>) -> bool {
    let days_remaining = (target - now).num_days();

    if days_remaining > 30 {
        now.day() == 1
    } else if days_remaining > 7 {
        now.weekday() == Weekday::Mon
    } else {
        true
    }
}
