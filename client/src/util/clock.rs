//! Wall-clock access shared by the browser and SSR builds.
//!
//! `chrono`'s `wasmbind` default feature backs `Utc::now` with `Date.now()`
//! under WASM, so the same calls work on both sides.

use chrono::{NaiveDate, Utc};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Today's date as `YYYY-MM-DD` in UTC.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` form value.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iso_date_accepts_form_values() {
        assert_eq!(parse_iso_date(" 2026-10-17 "), NaiveDate::from_ymd_opt(2026, 10, 17));
        assert!(parse_iso_date("17/10/2026").is_none());
        assert!(parse_iso_date("2026-02-30").is_none());
    }

    #[test]
    fn today_round_trips_through_parser() {
        assert!(parse_iso_date(&today_iso()).is_some());
        assert!(now_ms() > 1_704_067_200_000);
    }
}
