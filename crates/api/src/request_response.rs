// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use stayview_domain::{Booking, RiskLevel};

/// Loosely typed view criteria as sent by a client.
///
/// Omitted fields take the dashboard defaults: every status, every risk
/// level, no room-type restriction, sorted by id descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCriteriaRequest {
    /// Status labels to show (`Active`, `Cancelled`, `Completed`).
    #[serde(default)]
    pub statuses: Option<Vec<String>>,
    /// Risk labels to show (`High`, `Medium`, `Low`, `Unknown`).
    #[serde(default)]
    pub risk_levels: Option<Vec<String>>,
    /// Room types to show; empty means any.
    #[serde(default)]
    pub room_types: Option<Vec<String>>,
    /// Sort column token.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort direction token.
    #[serde(default)]
    pub sort_order: Option<String>,
}

/// API request to render the bookings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBookingsRequest {
    /// The full booking collection.
    pub bookings: Vec<Booking>,
    /// The active criteria.
    #[serde(default)]
    pub criteria: ViewCriteriaRequest,
}

/// A booking row with its derived risk label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingView {
    /// The booking record.
    #[serde(flatten)]
    pub booking: Booking,
    /// Risk label derived from the cancellation prediction.
    pub risk_level: RiskLevel,
}

/// API response for a rendered bookings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBookingsResponse {
    /// Visible rows, in display order.
    pub bookings: Vec<BookingView>,
    /// Number of visible rows.
    pub shown: usize,
    /// Number of bookings before filtering.
    pub total: usize,
    /// Room-type selection in effect, sorted; empty when unrestricted.
    pub room_types: Vec<String>,
}

/// API request carrying a booking collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingCollectionRequest {
    /// The full booking collection.
    pub bookings: Vec<Booking>,
}

/// API response listing room types present in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypesResponse {
    /// Distinct room types in order of first appearance.
    pub room_types: Vec<String>,
}

fn default_meal_plan() -> String {
    String::from("Not Selected")
}

fn default_market_segment() -> String {
    String::from("Online")
}

/// API request to prepare a booking for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareBookingRequest {
    /// The selected room.
    pub room_id: i64,
    /// Number of adults.
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
    /// Meal plan label.
    #[serde(default = "default_meal_plan")]
    pub type_of_meal_plan: String,
    /// Whether a parking space is needed.
    #[serde(default)]
    pub required_car_parking_space: bool,
    /// The room type of the selected room.
    pub room_type_reserved: String,
    /// Market segment label.
    #[serde(default = "default_market_segment")]
    pub market_segment_type: String,
    /// Number of special requests.
    #[serde(default)]
    pub no_of_special_requests: u32,
    /// Check-in date (`YYYY-MM-DD`).
    pub check_in_date: String,
    /// Booking date override (`YYYY-MM-DD`); the server date when omitted.
    #[serde(default)]
    pub today: Option<String>,
}

/// The normalized booking payload accepted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSubmission {
    /// The selected room.
    pub room_id: i64,
    /// Number of adults.
    pub no_of_adults: u32,
    /// Number of children.
    pub no_of_children: u32,
    /// Nights falling on a weekend.
    pub no_of_weekend_nights: u32,
    /// Nights falling on a weekday.
    pub no_of_week_nights: u32,
    /// Meal plan label.
    pub type_of_meal_plan: String,
    /// Whether a parking space is needed.
    pub required_car_parking_space: bool,
    /// The room type of the selected room.
    pub room_type_reserved: String,
    /// Whole days until check-in, never negative.
    pub lead_time: u32,
    /// Check-in calendar year.
    pub arrival_year: i32,
    /// Check-in month, 1-based.
    pub arrival_month: u8,
    /// Check-in day of month.
    pub arrival_date: u8,
    /// Market segment label.
    pub market_segment_type: String,
    /// Number of special requests.
    pub no_of_special_requests: u32,
    /// The date the booking is made (`YYYY-MM-DD`).
    pub booking_date: String,
    /// Adults plus children.
    pub no_of_individuals: u32,
    /// Total nights.
    pub no_of_days_booked: u32,
}
