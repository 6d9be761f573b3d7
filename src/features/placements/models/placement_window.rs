use chrono::{Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::placement_terms::{ParsedTerms, PlacementError, PlacementTerms};
use crate::shared::constants::FULL_DAY_HOURS;

/// Paid placement window of a listing, in marketplace local time.
///
/// Built once from the raw backend fields; every evaluation afterwards is
/// plain date and hour arithmetic on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementWindow {
    /// First day of the window, after the late-payment shift
    pub start_date: NaiveDate,
    /// Hour of day (0-23) at which the daily rotation begins
    pub start_hour: u32,
    /// Paid day-count
    pub days: u32,
    /// Length of the daily rotation in hours (0-24)
    pub daily_hours: u32,
}

impl PlacementWindow {
    /// Window starting on the transaction day at `start_hour`.
    ///
    /// A payment recorded later in the day than the start hour starts the
    /// window on the following day. Only the clock time is compared, so a
    /// payment at 23:59 with a 00:00 start also moves to the next day.
    pub fn new(transaction: NaiveDateTime, start_hour: u32, days: u32, daily_hours: u32) -> Self {
        let start_time = NaiveTime::from_hms_opt(start_hour % 24, 0, 0).unwrap_or(NaiveTime::MIN);
        let paid_late = transaction.time() > start_time;

        let start_date = if paid_late {
            transaction
                .date()
                .succ_opt()
                .unwrap_or_else(|| transaction.date())
        } else {
            transaction.date()
        };

        Self {
            start_date,
            start_hour: start_hour % 24,
            days,
            daily_hours: daily_hours.min(FULL_DAY_HOURS),
        }
    }

    pub fn from_terms(
        terms: &PlacementTerms<'_>,
        offset: FixedOffset,
    ) -> Result<Self, PlacementError> {
        let ParsedTerms {
            transaction,
            start_hour,
            days,
            daily_hours,
        } = terms.parse(offset)?;

        Ok(Self::new(transaction, start_hour, days, daily_hours))
    }

    /// Last calendar day on which the window is open.
    ///
    /// `start_date + days` leaves one day of grace past the paid day-count.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Hour at which the daily rotation stops, modulo 24
    pub fn end_hour(&self) -> u32 {
        (self.start_hour + self.daily_hours) % 24
    }

    pub fn covers_date(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date()
    }

    pub fn covers_hour(&self, hour: u32) -> bool {
        if self.daily_hours >= FULL_DAY_HOURS {
            return true;
        }
        if self.daily_hours == 0 {
            return false;
        }

        let end_hour = self.end_hour();
        if self.start_hour == end_hour {
            // wrapped back to the start: a full-day cycle
            true
        } else if self.start_hour < end_hour {
            self.start_hour <= hour && hour < end_hour
        } else {
            hour >= self.start_hour || hour < end_hour
        }
    }

    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.covers_date(now.date()) && self.covers_hour(now.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn test_payment_before_start_hour_starts_same_day() {
        let window = PlacementWindow::new(at(18, 9, 0), 10, 3, 10);
        assert_eq!(window.start_date, date(18));
        assert_eq!(window.end_date(), date(21));
    }

    #[test]
    fn test_payment_exactly_at_start_hour_starts_same_day() {
        let window = PlacementWindow::new(at(18, 10, 0), 10, 3, 10);
        assert_eq!(window.start_date, date(18));
    }

    #[test]
    fn test_late_payment_shifts_to_next_day() {
        let window = PlacementWindow::new(at(18, 14, 0), 10, 3, 10);
        assert_eq!(window.start_date, date(19));
    }

    #[test]
    fn test_payment_before_midnight_with_midnight_start_shifts() {
        let window = PlacementWindow::new(at(18, 23, 59), 0, 1, 24);
        assert_eq!(window.start_date, date(19));
    }

    #[test]
    fn test_date_range_includes_grace_day() {
        let window = PlacementWindow::new(at(18, 9, 0), 10, 3, 24);
        assert!(!window.covers_date(date(17)));
        assert!(window.covers_date(date(18)));
        assert!(window.covers_date(date(21)));
        assert!(!window.covers_date(date(22)));
    }

    #[test]
    fn test_plain_daily_interval() {
        let window = PlacementWindow::new(at(18, 9, 0), 10, 3, 10);
        assert_eq!(window.end_hour(), 20);
        assert!(!window.covers_hour(9));
        assert!(window.covers_hour(10));
        assert!(window.covers_hour(19));
        assert!(!window.covers_hour(20));
    }

    #[test]
    fn test_wrapping_daily_interval() {
        let window = PlacementWindow::new(at(18, 9, 0), 20, 3, 8);
        assert_eq!(window.end_hour(), 4);
        assert!(window.covers_hour(20));
        assert!(window.covers_hour(23));
        assert!(window.covers_hour(0));
        assert!(window.covers_hour(3));
        assert!(!window.covers_hour(4));
        assert!(!window.covers_hour(12));
    }

    #[test]
    fn test_full_and_empty_days() {
        let full = PlacementWindow::new(at(18, 9, 0), 10, 3, 24);
        let empty = PlacementWindow::new(at(18, 9, 0), 10, 3, 0);
        for hour in 0..24 {
            assert!(full.covers_hour(hour));
            assert!(!empty.covers_hour(hour));
        }
    }

    #[test]
    fn test_is_active_requires_both_tests() {
        let window = PlacementWindow::new(at(18, 9, 0), 10, 3, 10);
        assert!(window.is_active_at(at(18, 15, 0)));
        assert!(!window.is_active_at(at(18, 22, 0)));
        assert!(!window.is_active_at(at(25, 15, 0)));
    }

    #[test]
    fn test_end_date_saturates() {
        let window = PlacementWindow {
            start_date: NaiveDate::MAX,
            start_hour: 0,
            days: 5,
            daily_hours: 24,
        };
        assert_eq!(window.end_date(), NaiveDate::MAX);
    }
}
