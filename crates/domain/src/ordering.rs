// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking comparison for the sortable bookings table.
//!
//! ## Sort Keys
//!
//! - `id`: numeric
//! - `user`: collation of the guest's full name (empty when absent)
//! - `room_type`: collation of the reserved room type
//! - `price`: numeric on the average nightly price
//! - `prediction`: numeric, an unscored booking counts as `0`
//! - `status`: collation of the status label, not a severity order
//!
//! Text uses the Unicode Collation Algorithm with the CLDR root order:
//! accents and case are secondary to the base letter, and strings that
//! differ only in case order lowercase first. Numeric keys treat `-0.0`
//! and `0.0` as equal.
//!
//! Equal keys compare `Equal`; callers rely on a stable sort to keep the
//! input order among ties.

use crate::criteria::{SortKey, SortOrder, SortSpec};
use crate::types::Booking;
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

/// Compares bookings under a fixed sort spec.
///
/// Holds one collator so a whole sort reuses its buffers.
#[derive(Debug, Clone)]
pub struct BookingComparator {
    spec: SortSpec,
    collator: Collator,
}

impl BookingComparator {
    /// Creates a comparator for `spec`.
    #[must_use]
    pub fn new(spec: SortSpec) -> Self {
        Self {
            spec,
            collator: Collator::new(Tailoring::Cldr(Locale::Root), true, false),
        }
    }

    /// Compares two bookings.
    pub fn compare(&mut self, a: &Booking, b: &Booking) -> Ordering {
        let ordering: Ordering = match self.spec.sort_by {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::User => self
                .collator
                .collate(a.user_display_name(), b.user_display_name()),
            SortKey::RoomType => self
                .collator
                .collate(a.room_type_reserved.as_str(), b.room_type_reserved.as_str()),
            SortKey::Price => numeric(a.avg_price_per_room, b.avg_price_per_room),
            SortKey::Prediction => numeric(
                a.cancellation_prediction.unwrap_or(0.0),
                b.cancellation_prediction.unwrap_or(0.0),
            ),
            SortKey::Status => self.collator.collate(a.status.as_str(), b.status.as_str()),
        };

        match self.spec.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Compares two bookings under `spec`.
///
/// Sorting a collection should build one [`BookingComparator`] instead.
#[must_use]
pub fn compare(a: &Booking, b: &Booking, spec: SortSpec) -> Ordering {
    BookingComparator::new(spec).compare(a, b)
}

/// Total order on floats with both zeros equal.
fn numeric(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}
