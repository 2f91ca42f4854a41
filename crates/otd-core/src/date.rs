//! Calendar-day identification for feed requests.
//!
//! The upstream feed is keyed by month and day only; the year is fixed by
//! its "this day in history" semantics. `FeedDate` carries that pair in
//! validated form and renders it in the two formats the pipeline needs.

use crate::error::{CoreError, Result};
use chrono::{Datelike, Local};
use std::fmt;
use std::str::FromStr;

/// Maximum day per month. February allows 29: the feed serves leap-day
/// events every year.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A validated month/day pair identifying one day's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedDate {
    month: u32,
    day: u32,
}

impl FeedDate {
    /// Create a new feed date, validating month and day ranges.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidDate(format!(
                "month must be 1-12, got {month}"
            )));
        }
        let max_day = DAYS_IN_MONTH[(month - 1) as usize];
        if day == 0 || day > max_day {
            return Err(CoreError::InvalidDate(format!(
                "day must be 1-{max_day} for month {month}, got {day}"
            )));
        }
        Ok(Self { month, day })
    }

    /// Today's month/day in local time.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        // Month/day from a real calendar date are always in range.
        Self {
            month: now.month(),
            day: now.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// URL path segment for the feed request: zero-padded `MM/DD`.
    pub fn request_path(&self) -> String {
        format!("{:02}/{:02}", self.month, self.day)
    }

    /// Label written into the `Date` column: zero-padded `DD/MM`.
    pub fn row_label(&self) -> String {
        format!("{:02}/{:02}", self.day, self.month)
    }
}

impl fmt::Display for FeedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

impl FromStr for FeedDate {
    type Err = CoreError;

    /// Parse `MM-DD` or `MM/DD`.
    fn from_str(s: &str) -> Result<Self> {
        let (month, day) = s.split_once(['-', '/']).ok_or_else(|| {
            CoreError::InvalidDate(format!("expected MM-DD or MM/DD, got '{s}'"))
        })?;
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidDate(format!("invalid month '{month}'")))?;
        let day: u32 = day
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidDate(format!("invalid day '{day}'")))?;
        Self::new(month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_zero_padded() {
        let date = FeedDate::new(3, 7).unwrap();
        assert_eq!(date.request_path(), "03/07");
    }

    #[test]
    fn test_row_label_is_day_month() {
        let date = FeedDate::new(11, 1).unwrap();
        assert_eq!(date.row_label(), "01/11");
    }

    #[test]
    fn test_display() {
        let date = FeedDate::new(11, 1).unwrap();
        assert_eq!(date.to_string(), "11/01");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(FeedDate::new(0, 1).is_err());
        assert!(FeedDate::new(13, 1).is_err());
        assert!(FeedDate::new(1, 0).is_err());
        assert!(FeedDate::new(1, 32).is_err());
        assert!(FeedDate::new(4, 31).is_err());
    }

    #[test]
    fn test_accepts_leap_day() {
        assert!(FeedDate::new(2, 29).is_ok());
        assert!(FeedDate::new(2, 30).is_err());
    }

    #[test]
    fn test_from_str_both_separators() {
        assert_eq!(
            "11-01".parse::<FeedDate>().unwrap(),
            FeedDate::new(11, 1).unwrap()
        );
        assert_eq!(
            "3/7".parse::<FeedDate>().unwrap(),
            FeedDate::new(3, 7).unwrap()
        );
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("november".parse::<FeedDate>().is_err());
        assert!("11".parse::<FeedDate>().is_err());
        assert!("11-xx".parse::<FeedDate>().is_err());
    }

    #[test]
    fn test_today_is_valid() {
        let today = FeedDate::today();
        assert!(FeedDate::new(today.month(), today.day()).is_ok());
    }
}
