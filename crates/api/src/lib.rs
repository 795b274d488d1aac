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
    clippy::all
)]

mod error;
mod request_response;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use time::Date;
use tracing::{debug, info, warn};

use stayview_domain::{
    Booking, BookingStatus, BookingSummary, DerivedFields, DomainError, FilterCriteria, RiskLevel,
    RoomTypeFilter, SortKey, SortOrder, SortSpec, StayTotals, classify, derive,
    discover_room_types, parse_calendar_date, render, stay_totals, summarize,
};

pub use error::{ApiError, translate_domain_error};
pub use request_response::{
    BookingCollectionRequest, BookingSubmission, BookingView, PrepareBookingRequest,
    RenderBookingsRequest, RenderBookingsResponse, RoomTypesResponse, ViewCriteriaRequest,
};

/// Parses every label in `labels`, failing on the first unrecognized one.
fn parse_labels<T>(labels: &[String]) -> Result<BTreeSet<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError> + Ord,
{
    labels.iter().map(|label| label.parse::<T>()).collect()
}

/// Converts loosely typed criteria into domain filter and sort values.
///
/// Omitted fields take their defaults. Present fields are parsed strictly.
///
/// # Errors
///
/// Returns `ApiError::InvalidCriteria` if any status, risk label, sort key
/// or sort order is not one of its enumerated values.
pub fn parse_criteria(
    request: &ViewCriteriaRequest,
) -> Result<(FilterCriteria, SortSpec), ApiError> {
    let mut criteria: FilterCriteria = FilterCriteria::default();

    if let Some(statuses) = &request.statuses {
        criteria.statuses = parse_labels::<BookingStatus>(statuses)?;
    }
    if let Some(risk_levels) = &request.risk_levels {
        criteria.risk_levels = parse_labels::<RiskLevel>(risk_levels)?;
    }
    if let Some(room_types) = &request.room_types {
        criteria.room_types = room_types.iter().cloned().collect();
    }

    let mut spec: SortSpec = SortSpec::default();
    if let Some(sort_by) = &request.sort_by {
        spec.sort_by = sort_by.parse::<SortKey>()?;
    }
    if let Some(sort_order) = &request.sort_order {
        spec.sort_order = sort_order.parse::<SortOrder>()?;
    }

    Ok((criteria, spec))
}

/// Returns the room-type selection for a render request.
///
/// A request without `room_types` has no selection yet, so it is seeded
/// from the bookings being rendered. An explicit list, even an empty one,
/// is taken as the operator's selection.
fn room_type_selection(request: &RenderBookingsRequest) -> RoomTypeFilter {
    let mut filter: RoomTypeFilter = match &request.criteria.room_types {
        Some(selected) => RoomTypeFilter::Initialized(selected.iter().cloned().collect()),
        None => RoomTypeFilter::Uninitialized,
    };
    if filter.observe(&request.bookings) {
        debug!("Seeded room-type selection from bookings");
    }
    filter
}

/// Renders the bookings view for the given criteria.
///
/// The response echoes the room-type selection in effect so a client can
/// hold it for later requests.
///
/// # Errors
///
/// Returns `ApiError::InvalidCriteria` if the criteria cannot be parsed.
pub fn render_bookings(
    request: &RenderBookingsRequest,
) -> Result<RenderBookingsResponse, ApiError> {
    let (mut criteria, spec): (FilterCriteria, SortSpec) = parse_criteria(&request.criteria)
        .inspect_err(|e| {
            warn!(error = %e, "Rejected view criteria");
        })?;
    criteria.room_types = room_type_selection(request).as_criteria_set();

    let visible: Vec<Booking> = render(&request.bookings, &criteria, spec);
    let bookings: Vec<BookingView> = visible
        .into_iter()
        .map(|booking| BookingView {
            risk_level: classify(booking.cancellation_prediction),
            booking,
        })
        .collect();

    info!(
        total = request.bookings.len(),
        shown = bookings.len(),
        sort_by = spec.sort_by.as_str(),
        sort_order = spec.sort_order.as_str(),
        "Rendered bookings view"
    );

    Ok(RenderBookingsResponse {
        shown: bookings.len(),
        total: request.bookings.len(),
        room_types: criteria.room_types.into_iter().collect(),
        bookings,
    })
}

/// Summarizes the full booking collection.
///
/// This operation never fails.
#[must_use]
pub fn summarize_bookings(request: &BookingCollectionRequest) -> BookingSummary {
    let summary: BookingSummary = summarize(&request.bookings);

    info!(
        total = summary.total_bookings,
        high_risk = summary.high_risk_count,
        "Summarized bookings"
    );

    summary
}

/// Lists the room types present in a booking collection.
///
/// Used to seed the room-type filter the first time bookings load.
#[must_use]
pub fn list_room_types(request: &BookingCollectionRequest) -> RoomTypesResponse {
    RoomTypesResponse {
        room_types: discover_room_types(&request.bookings),
    }
}

/// Normalizes a booking form into the payload the backend accepts.
///
/// `today` is used as the booking date unless the request overrides it.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if `check_in_date` or `today` is not a
/// valid `YYYY-MM-DD` date.
pub fn prepare_booking(
    request: &PrepareBookingRequest,
    today: Date,
) -> Result<BookingSubmission, ApiError> {
    let check_in: Date = parse_calendar_date(&request.check_in_date)
        .map_err(|e| translate_domain_error(e, "check_in_date"))?;
    let booking_date: Date = match &request.today {
        Some(value) => {
            parse_calendar_date(value).map_err(|e| translate_domain_error(e, "today"))?
        }
        None => today,
    };

    let derived: DerivedFields = derive(check_in, booking_date);
    let totals: StayTotals = stay_totals(
        request.no_of_adults,
        request.no_of_children,
        request.no_of_weekend_nights,
        request.no_of_week_nights,
    );

    info!(
        room_id = request.room_id,
        check_in = %check_in,
        lead_time = derived.lead_time,
        "Prepared booking submission"
    );

    Ok(BookingSubmission {
        room_id: request.room_id,
        no_of_adults: request.no_of_adults,
        no_of_children: request.no_of_children,
        no_of_weekend_nights: request.no_of_weekend_nights,
        no_of_week_nights: request.no_of_week_nights,
        type_of_meal_plan: request.type_of_meal_plan.clone(),
        required_car_parking_space: request.required_car_parking_space,
        room_type_reserved: request.room_type_reserved.clone(),
        lead_time: derived.lead_time,
        arrival_year: derived.arrival_year,
        arrival_month: derived.arrival_month,
        arrival_date: derived.arrival_date,
        market_segment_type: request.market_segment_type.clone(),
        no_of_special_requests: request.no_of_special_requests,
        booking_date: booking_date.to_string(),
        no_of_individuals: totals.no_of_individuals,
        no_of_days_booked: totals.no_of_days_booked,
    })
}
