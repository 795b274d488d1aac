// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use stayview_domain::{Booking, BookingStatus, BookingUser};

use crate::{PrepareBookingRequest, ViewCriteriaRequest};

pub fn create_test_guest(id: i64, full_name: &str) -> BookingUser {
    BookingUser {
        id,
        email: format!("guest{id}@example.com"),
        full_name: Some(full_name.to_string()),
    }
}

pub fn create_test_bookings() -> Vec<Booking> {
    vec![
        Booking::new(1, "Room Type 1", 95.0, BookingStatus::Active)
            .with_prediction(0.82)
            .with_user(create_test_guest(10, "Maria Lopez")),
        Booking::new(2, "Room Type 4", 160.0, BookingStatus::Cancelled)
            .with_prediction(0.55)
            .with_user(create_test_guest(11, "ben Carter")),
        Booking::new(3, "Room Type 1", 95.0, BookingStatus::Active)
            .with_user(create_test_guest(12, "Alice Moreau")),
        Booking::new(4, "Room Type 2", 120.0, BookingStatus::Completed)
            .with_prediction(0.12)
            .with_user(create_test_guest(13, "Chen Wei")),
    ]
}

pub fn criteria(sort_by: &str, sort_order: &str) -> ViewCriteriaRequest {
    ViewCriteriaRequest {
        sort_by: Some(sort_by.to_string()),
        sort_order: Some(sort_order.to_string()),
        ..ViewCriteriaRequest::default()
    }
}

pub fn create_test_booking_form(check_in_date: &str) -> PrepareBookingRequest {
    PrepareBookingRequest {
        room_id: 3,
        no_of_adults: 2,
        no_of_children: 1,
        no_of_weekend_nights: 2,
        no_of_week_nights: 3,
        type_of_meal_plan: String::from("Meal Plan 1"),
        required_car_parking_space: false,
        room_type_reserved: String::from("Room Type 1"),
        market_segment_type: String::from("Online"),
        no_of_special_requests: 1,
        check_in_date: check_in_date.to_string(),
        today: None,
    }
}
