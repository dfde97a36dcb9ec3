//! Voting window value object

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// The weekday and hour range during which dishes may be chosen
///
/// The hour range is half-open: `start_hour` is allowed, `end_hour` is not.
/// Timestamps are compared as local wall-clock time; converting from UTC or
/// another zone is the caller's job.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lunch_domain::VotingWindow;
///
/// let window = VotingWindow::default(); // Monday, 06:00 - 22:00
/// let monday_six = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(6, 0, 0).unwrap();
/// let monday_ten_pm = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(22, 0, 0).unwrap();
///
/// assert!(window.contains(&monday_six));
/// assert!(!window.contains(&monday_ten_pm));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingWindow {
    weekday: Weekday,
    start_hour: u32,
    end_hour: u32,
}

impl VotingWindow {
    pub const DEFAULT_WEEKDAY: Weekday = Weekday::Mon;
    pub const DEFAULT_START_HOUR: u32 = 6;
    pub const DEFAULT_END_HOUR: u32 = 22;

    /// Create a window, returning `None` unless `start_hour < end_hour <= 24`
    pub fn new(weekday: Weekday, start_hour: u32, end_hour: u32) -> Option<Self> {
        if start_hour < end_hour && end_hour <= 24 {
            Some(Self {
                weekday,
                start_hour,
                end_hour,
            })
        } else {
            None
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Both the weekday and the hour must match
    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        let day_matches = at.weekday() == self.weekday;
        let hour = at.hour();
        let hour_matches = hour >= self.start_hour && hour < self.end_hour;
        day_matches && hour_matches
    }
}

impl Default for VotingWindow {
    fn default() -> Self {
        Self {
            weekday: Self::DEFAULT_WEEKDAY,
            start_hour: Self::DEFAULT_START_HOUR,
            end_hour: Self::DEFAULT_END_HOUR,
        }
    }
}

impl std::fmt::Display for VotingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00",
            self.weekday, self.start_hour, self.end_hour
        )
    }
}
