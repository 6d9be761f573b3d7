use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Captures;
use thiserror::Error;

use crate::features::listings::Listing;
use crate::shared::constants::{DAYS_PER_MONTH, DAYS_PER_WEEK, FULL_DAY_HOURS};
use crate::shared::validation::{
    PRICING_DAYS_REGEX, PRICING_HOURS_REGEX, SELECTED_TIME_REGEX, TRANSACTION_TIME_REGEX,
};

/// Why a listing's placement fields do not describe a window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Missing placement field: {0}")]
    MissingField(&'static str),

    #[error("Invalid selected time: {0}")]
    InvalidSelectedTime(String),

    #[error("Invalid pricing days: {0}")]
    InvalidDays(String),

    #[error("Invalid pricing hours: {0}")]
    InvalidHours(String),

    #[error("Invalid transaction date: {0}")]
    InvalidTransactionDate(String),

    #[error("Invalid transaction time: {0}")]
    InvalidTransactionTime(String),
}

/// Raw placement fields as they arrive from the backend
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementTerms<'a> {
    pub transaction_date: Option<&'a str>,
    pub transaction_time: Option<&'a str>,
    pub selected_time: Option<&'a str>,
    pub days: Option<&'a str>,
    pub hours: Option<&'a str>,
}

impl<'a> From<&'a Listing> for PlacementTerms<'a> {
    fn from(listing: &'a Listing) -> Self {
        let pricing = listing.pricing.as_ref();
        Self {
            transaction_date: listing.transaction_date.as_deref(),
            transaction_time: listing.transaction_time.as_deref(),
            selected_time: listing.selected_time.as_deref(),
            days: pricing.and_then(|p| p.days.as_deref()),
            hours: pricing.and_then(|p| p.hours.as_deref()),
        }
    }
}

/// Terms parsed into typed values, before the next-day shift is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTerms {
    pub transaction: NaiveDateTime,
    pub start_hour: u32,
    pub days: u32,
    pub daily_hours: u32,
}

impl PlacementTerms<'_> {
    /// Parse every field, converting zoned timestamps into `offset` local time
    pub fn parse(&self, offset: FixedOffset) -> Result<ParsedTerms, PlacementError> {
        let date = required(self.transaction_date, "transactionDate")?;
        let selected_time = required(self.selected_time, "selectedTime")?;
        let hours = required(self.hours, "pricing.hours")?;
        let days = required(self.days, "pricing.days")?;

        let (date, embedded_time) = parse_transaction_date(date, offset)?;
        let time = match self.transaction_time.filter(|t| !t.trim().is_empty()) {
            Some(raw) => parse_transaction_time(raw)?,
            None => embedded_time.unwrap_or(NaiveTime::MIN),
        };

        Ok(ParsedTerms {
            transaction: date.and_time(time),
            start_hour: parse_selected_time(selected_time)?,
            days: parse_day_count(days)?,
            daily_hours: parse_daily_hours(hours)?,
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, PlacementError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(PlacementError::MissingField(field))
}

/// "a. m." / "PM" style marker, if any
fn meridiem(caps: &Captures<'_>, index: usize) -> Option<bool> {
    caps.get(index).map(|m| {
        m.as_str()
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'p'))
    })
}

/// Convert a 12-hour clock hour to 24-hour
fn to_24_hour(hour: u32, is_pm: bool) -> Option<u32> {
    match (hour, is_pm) {
        (1..=11, false) => Some(hour),
        (12, false) => Some(0),
        (1..=11, true) => Some(hour + 12),
        (12, true) => Some(12),
        _ => None,
    }
}

/// Start hour (0-23) of the daily rotation, from "10 AM", "10:30 PM" or "22:00".
///
/// The rotation is hour-granular: minutes are validated and then dropped, so
/// "10:30 AM" starts at 10:00.
pub fn parse_selected_time(raw: &str) -> Result<u32, PlacementError> {
    let invalid = || PlacementError::InvalidSelectedTime(raw.to_string());
    let caps = SELECTED_TIME_REGEX.captures(raw).ok_or_else(invalid)?;

    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    if let Some(minutes) = caps.get(2) {
        let minutes: u32 = minutes.as_str().parse().map_err(|_| invalid())?;
        if minutes > 59 {
            return Err(invalid());
        }
    }

    match meridiem(&caps, 3) {
        Some(is_pm) => to_24_hour(hour, is_pm).ok_or_else(invalid),
        None if hour < 24 => Ok(hour),
        None => Err(invalid()),
    }
}

/// Day-count of a pricing tier; month units count 31 days, week units 7
pub fn parse_day_count(raw: &str) -> Result<u32, PlacementError> {
    let invalid = || PlacementError::InvalidDays(raw.to_string());
    let caps = PRICING_DAYS_REGEX.captures(raw).ok_or_else(invalid)?;

    let count: u32 = caps[1].parse().map_err(|_| invalid())?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();

    let multiplier = if unit.starts_with("mes") {
        DAYS_PER_MONTH
    } else if unit.starts_with("semana") {
        DAYS_PER_WEEK
    } else {
        1
    };

    count.checked_mul(multiplier).ok_or_else(invalid)
}

/// Daily rotation length in hours, 0-24
pub fn parse_daily_hours(raw: &str) -> Result<u32, PlacementError> {
    let invalid = || PlacementError::InvalidHours(raw.to_string());
    let caps = PRICING_HOURS_REGEX.captures(raw).ok_or_else(invalid)?;

    let hours: u32 = caps[1].parse().map_err(|_| invalid())?;
    if hours > FULL_DAY_HOURS {
        return Err(invalid());
    }
    Ok(hours)
}

/// Calendar date of a transaction, plus its clock time when the value carries one
pub fn parse_transaction_date(
    raw: &str,
    offset: FixedOffset,
) -> Result<(NaiveDate, Option<NaiveTime>), PlacementError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok((date, None));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d/%m/%Y") {
        return Ok((date, None));
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        let local = zoned.with_timezone(&offset).naive_local();
        return Ok((local.date(), Some(local.time())));
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok((local.date(), Some(local.time())));
    }

    Err(PlacementError::InvalidTransactionDate(raw.to_string()))
}

/// Clock time of a transaction, 24-hour or 12-hour
pub fn parse_transaction_time(raw: &str) -> Result<NaiveTime, PlacementError> {
    let invalid = || PlacementError::InvalidTransactionTime(raw.to_string());
    let caps = TRANSACTION_TIME_REGEX.captures(raw).ok_or_else(invalid)?;

    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    let second: u32 = match caps.get(3) {
        Some(s) => s.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    let hour = match meridiem(&caps, 4) {
        Some(is_pm) => to_24_hour(hour, is_pm).ok_or_else(invalid)?,
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}
