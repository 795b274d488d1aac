// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a booking as reported by the backend.
///
/// The backend sets this independently of the cancellation prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BookingStatus {
    /// The stay is upcoming or in progress.
    Active,
    /// The booking was cancelled by the guest.
    Cancelled,
    /// The stay has finished.
    Completed,
}

impl BookingStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Cancelled, Self::Completed];

    /// Converts this status to its wire label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Cancelled" => Ok(Self::Cancelled),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidCriteria {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The guest account attached to a booking, for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingUser {
    /// The account identifier.
    pub id: i64,
    /// The account email address.
    #[serde(default)]
    pub email: String,
    /// The guest's full name, if they provided one.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl BookingUser {
    /// Returns the name shown in the bookings table, or an empty string.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or_default()
    }
}

/// The room inventory record attached to a booking, for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRoom {
    /// The room identifier.
    pub id: i64,
    /// The room type label.
    pub room_type: String,
    /// Rooms of this type in the hotel.
    #[serde(default)]
    pub total_rooms: u32,
    /// Rooms of this type still free.
    #[serde(default)]
    pub available_rooms: u32,
    /// Nightly price.
    #[serde(default)]
    pub price: f64,
}

/// A booking record as delivered by the backend.
///
/// The view layer never mutates a `Booking`; every view is derived from a
/// borrowed collection of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The booking identifier.
    pub id: i64,
    /// The owning account identifier.
    #[serde(default)]
    pub user_id: i64,
    /// The reserved room identifier.
    #[serde(default)]
    pub room_id: i64,
    /// Number of adults.
    #[serde(default)]
    pub no_of_adults: u32,
    /// Number of children.
    #[serde(default)]
    pub no_of_children: u32,
    /// Nights falling on a weekend.
    #[serde(default)]
    pub no_of_weekend_nights: u32,
    /// Nights falling on a weekday.
    #[serde(default)]
    pub no_of_week_nights: u32,
    /// The reserved room type label.
    pub room_type_reserved: String,
    /// Days between booking and check-in.
    #[serde(default)]
    pub lead_time: u32,
    /// Check-in calendar year.
    #[serde(default)]
    pub arrival_year: i32,
    /// Check-in month (1-based).
    #[serde(default)]
    pub arrival_month: u8,
    /// Check-in day of month.
    #[serde(default)]
    pub arrival_date: u8,
    /// Average nightly price.
    pub avg_price_per_room: f64,
    /// Cancellation probability in `[0, 1]`; `None` when not yet scored.
    #[serde(default)]
    pub cancellation_prediction: Option<f64>,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// The guest account, when the backend embeds it.
    #[serde(default)]
    pub user: Option<BookingUser>,
    /// The room record, when the backend embeds it.
    #[serde(default)]
    pub room: Option<BookingRoom>,
}

impl Booking {
    /// Creates an unscored booking with zeroed occupancy, stay and arrival fields.
    #[must_use]
    pub fn new(
        id: i64,
        room_type_reserved: impl Into<String>,
        avg_price_per_room: f64,
        status: BookingStatus,
    ) -> Self {
        Self {
            id,
            user_id: 0,
            room_id: 0,
            no_of_adults: 0,
            no_of_children: 0,
            no_of_weekend_nights: 0,
            no_of_week_nights: 0,
            room_type_reserved: room_type_reserved.into(),
            lead_time: 0,
            arrival_year: 0,
            arrival_month: 0,
            arrival_date: 0,
            avg_price_per_room,
            cancellation_prediction: None,
            status,
            user: None,
            room: None,
        }
    }

    /// Sets the cancellation prediction.
    #[must_use]
    pub const fn with_prediction(mut self, prediction: f64) -> Self {
        self.cancellation_prediction = Some(prediction);
        self
    }

    /// Attaches a guest account.
    #[must_use]
    pub fn with_user(mut self, user: BookingUser) -> Self {
        self.user_id = user.id;
        self.user = Some(user);
        self
    }

    /// Sets the check-in date components.
    #[must_use]
    pub const fn with_arrival(mut self, year: i32, month: u8, day: u8) -> Self {
        self.arrival_year = year;
        self.arrival_month = month;
        self.arrival_date = day;
        self
    }

    /// Returns the attached guest's display name, or an empty string.
    #[must_use]
    pub fn user_display_name(&self) -> &str {
        self.user.as_ref().map_or("", BookingUser::display_name)
    }
}
