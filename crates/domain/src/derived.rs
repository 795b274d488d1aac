// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived booking fields computed at submission time.
//!
//! The backend expects the check-in date split into calendar components,
//! the lead time in whole days, and stay totals. None of these are
//! validated for chronological sanity: a check-in date in the past is legal
//! and yields a lead time of zero.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Check-in derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    /// Whole days from `now` until check-in, never negative.
    pub lead_time: u32,
    /// Check-in calendar year.
    pub arrival_year: i32,
    /// Check-in month, 1-based.
    pub arrival_month: u8,
    /// Check-in day of month.
    pub arrival_date: u8,
}

/// Party size and stay length totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayTotals {
    /// Adults plus children.
    pub no_of_individuals: u32,
    /// Weekend nights plus week nights.
    pub no_of_days_booked: u32,
}

/// Computes lead time and arrival components for a check-in date.
#[must_use]
pub fn derive(check_in: Date, now: Date) -> DerivedFields {
    let days: i64 = (check_in - now).whole_days().max(0);

    DerivedFields {
        lead_time: u32::try_from(days).unwrap_or(u32::MAX),
        arrival_year: check_in.year(),
        arrival_month: u8::from(check_in.month()),
        arrival_date: check_in.day(),
    }
}

/// Computes party size and stay length.
#[must_use]
pub const fn stay_totals(
    no_of_adults: u32,
    no_of_children: u32,
    no_of_weekend_nights: u32,
    no_of_week_nights: u32,
) -> StayTotals {
    StayTotals {
        no_of_individuals: no_of_adults.saturating_add(no_of_children),
        no_of_days_booked: no_of_weekend_nights.saturating_add(no_of_week_nights),
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_calendar_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(date_string, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        }
    })
}
