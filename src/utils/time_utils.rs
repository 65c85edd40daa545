use chrono::{DateTime, Local, Utc};

/// Monotonic instant that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    /// RFC 7231 date, as a browser's `Date.toUTCString()` prints it.
    pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
    pub const BUBBLE_TIME_FORMAT: &str = "%H:%M";

    pub fn http_date(dt: DateTime<Utc>) -> String {
        dt.format(Self::HTTP_DATE_FORMAT).to_string()
    }

    pub fn now_http_date() -> String {
        Self::http_date(Utc::now())
    }

    /// Local wall-clock time for a chat bubble footer.
    pub fn bubble_time(dt: DateTime<Utc>) -> String {
        dt.with_timezone(&Local)
            .format(Self::BUBBLE_TIME_FORMAT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::TimeZone};

    #[test]
    fn http_date_matches_browser_format() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap();
        assert_eq!(TimeUtils::http_date(dt), "Sun, 18 Oct 2026 09:05:07 GMT");
    }
}
