// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Booking, BookingStatus, BookingUser, RiskLevel, classify};

#[test]
fn test_status_labels() {
    for status in BookingStatus::ALL {
        assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(status));
        assert_eq!(status.to_string(), status.as_str());
    }
    assert!("active".parse::<BookingStatus>().is_err());
}

#[test]
fn test_booking_from_backend_json() {
    let json: &str = r#"{
        "id": 42,
        "user_id": 7,
        "room_id": 3,
        "no_of_adults": 2,
        "no_of_children": 1,
        "no_of_weekend_nights": 2,
        "no_of_week_nights": 3,
        "type_of_meal_plan": "Meal Plan 1",
        "room_type_reserved": "Room Type 1",
        "lead_time": 12,
        "arrival_year": 2026,
        "arrival_month": 11,
        "arrival_date": 4,
        "avg_price_per_room": 99.5,
        "cancellation_prediction": null,
        "status": "Active",
        "created_at": "2026-10-23T09:00:00",
        "user": {"id": 7, "email": "guest@example.com", "full_name": "Ada Guest", "role": "USER"}
    }"#;

    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.id, 42);
    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.cancellation_prediction, None);
    assert_eq!(classify(booking.cancellation_prediction), RiskLevel::Unknown);
    assert_eq!(booking.user_display_name(), "Ada Guest");
    assert_eq!(booking.arrival_month, 11);
    assert!(booking.room.is_none());
}

#[test]
fn test_missing_prediction_matches_null() {
    let absent: Booking = serde_json::from_str(
        r#"{"id": 1, "room_type_reserved": "Suite", "avg_price_per_room": 10.0, "status": "Cancelled"}"#,
    )
    .unwrap();
    let null: Booking = serde_json::from_str(
        r#"{"id": 1, "room_type_reserved": "Suite", "avg_price_per_room": 10.0, "status": "Cancelled", "cancellation_prediction": null}"#,
    )
    .unwrap();
    assert_eq!(absent, null);
}

#[test]
fn test_unknown_status_is_rejected() {
    let result: Result<Booking, _> = serde_json::from_str(
        r#"{"id": 1, "room_type_reserved": "Suite", "avg_price_per_room": 10.0, "status": "Pending"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_user_display_name_defaults_to_empty() {
    let booking: Booking = Booking::new(1, "Suite", 10.0, BookingStatus::Active).with_user(
        BookingUser {
            id: 9,
            email: String::from("anon@example.com"),
            full_name: None,
        },
    );
    assert_eq!(booking.user_display_name(), "");
    assert_eq!(booking.user_id, 9);
}
