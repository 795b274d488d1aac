// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard summary metrics.
//!
//! Summaries always cover the entire booking collection, never the
//! currently filtered view.

use crate::risk::{RiskLevel, classify};
use crate::types::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate counts over a booking collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// Number of bookings summarized.
    pub total_bookings: usize,
    /// Bookings per status. Every status is present, possibly with zero.
    pub counts_by_status: BTreeMap<BookingStatus, usize>,
    /// Bookings per reserved room type.
    pub counts_by_room_type: BTreeMap<String, usize>,
    /// Bookings per arrival month (1-based).
    pub counts_by_arrival_month: BTreeMap<u8, usize>,
    /// Bookings classified `High` risk, regardless of status.
    pub high_risk_count: usize,
    /// `high_risk_count` divided by the number of active bookings; `0` when
    /// there are none.
    pub high_risk_ratio: f64,
}

impl BookingSummary {
    /// Returns the count for one status.
    #[must_use]
    pub fn status_count(&self, status: BookingStatus) -> usize {
        self.counts_by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Summarizes `bookings`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(bookings: &[Booking]) -> BookingSummary {
    let mut counts_by_status: BTreeMap<BookingStatus, usize> =
        BookingStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    let mut counts_by_room_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut counts_by_arrival_month: BTreeMap<u8, usize> = BTreeMap::new();
    let mut high_risk_count: usize = 0;

    for booking in bookings {
        *counts_by_status.entry(booking.status).or_insert(0) += 1;
        *counts_by_room_type
            .entry(booking.room_type_reserved.clone())
            .or_insert(0) += 1;
        *counts_by_arrival_month
            .entry(booking.arrival_month)
            .or_insert(0) += 1;
        if classify(booking.cancellation_prediction) == RiskLevel::High {
            high_risk_count += 1;
        }
    }

    let active: usize = counts_by_status
        .get(&BookingStatus::Active)
        .copied()
        .unwrap_or(0);
    let high_risk_ratio: f64 = if active == 0 {
        0.0
    } else {
        high_risk_count as f64 / active as f64
    };

    BookingSummary {
        total_bookings: bookings.len(),
        counts_by_status,
        counts_by_room_type,
        counts_by_arrival_month,
        high_risk_count,
        high_risk_ratio,
    }
}
