// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod criteria;
mod derived;
mod error;
mod filter;
mod ordering;
mod risk;
mod summary;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use criteria::{
    FilterCriteria, RoomTypeFilter, SortKey, SortOrder, SortSpec, discover_room_types,
};
pub use derived::{DerivedFields, StayTotals, derive, parse_calendar_date, stay_totals};
pub use filter::passes;
pub use ordering::{BookingComparator, compare};
pub use risk::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RiskLevel, classify};
pub use summary::{BookingSummary, summarize};
pub use view::render;

// Re-export public types
pub use error::DomainError;
pub use types::{Booking, BookingRoom, BookingStatus, BookingUser};
