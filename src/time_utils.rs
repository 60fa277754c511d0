// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and minute arithmetic.

use chrono::{DateTime, SecondsFormat, Utc};

pub const MINUTES_PER_HOUR: u64 = 60;
pub const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Minutes expressed as hours, rounded to two decimals.
pub fn minutes_to_hours(minutes: u64) -> f64 {
    round2(minutes as f64 / MINUTES_PER_HOUR as f64)
}

/// Minutes expressed as days, rounded to two decimals.
pub fn minutes_to_days(minutes: u64) -> f64 {
    round2(minutes as f64 / MINUTES_PER_DAY as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2025-03-04T05:06:07Z");
    }

    #[test]
    fn test_minutes_to_hours_rounds() {
        assert_eq!(minutes_to_hours(0), 0.0);
        assert_eq!(minutes_to_hours(90), 1.5);
        assert_eq!(minutes_to_hours(100), 1.67);
    }

    #[test]
    fn test_minutes_to_days_rounds() {
        assert_eq!(minutes_to_days(1440), 1.0);
        assert_eq!(minutes_to_days(1500), 1.04);
    }
}
