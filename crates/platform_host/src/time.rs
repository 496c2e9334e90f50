//! Wall-clock helpers shared by the taskbar clock and the post editor.

#[cfg(not(target_arch = "wasm32"))]
use chrono::{Datelike, Local, Timelike, Utc};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Broken-down local date and time.
pub struct LocalDateTime {
    /// Calendar year.
    pub year: u32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl LocalDateTime {
    /// Formats the date part as `YYYY-MM-DD`.
    pub fn iso_date(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_chrono<T: Datelike + Timelike>(moment: &T) -> Self {
        Self {
            year: u32::try_from(moment.year()).unwrap_or_default(),
            month: moment.month(),
            day: moment.day(),
            hour: moment.hour(),
            minute: moment.minute(),
            second: moment.second(),
        }
    }
}

/// Returns the current local date and time in the user's zone.
pub fn local_now() -> LocalDateTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        LocalDateTime {
            year: date.get_full_year(),
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        LocalDateTime::from_chrono(&Local::now())
    }
}

/// Returns today's local date as `YYYY-MM-DD`.
pub fn today_iso_date() -> String {
    local_now().iso_date()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn breaks_down_leap_day_timestamp() {
        // 2024-02-29T13:45:30Z
        let moment = DateTime::from_timestamp_millis(1_709_214_330_000).expect("timestamp");
        assert_eq!(
            LocalDateTime::from_chrono(&moment),
            LocalDateTime {
                year: 2024,
                month: 2,
                day: 29,
                hour: 13,
                minute: 45,
                second: 30,
            }
        );
    }

    #[test]
    fn iso_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|day| day.and_hms_opt(9, 5, 0))
            .expect("date");
        assert_eq!(LocalDateTime::from_chrono(&date).iso_date(), "2024-03-07");
    }

    #[test]
    fn today_is_a_parseable_calendar_date() {
        let today = today_iso_date();
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok(), "{today}");
    }

    #[test]
    fn unix_clock_is_after_epoch() {
        assert!(unix_time_ms_now() > 1_700_000_000_000);
    }
}
