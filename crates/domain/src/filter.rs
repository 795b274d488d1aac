// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::criteria::FilterCriteria;
use crate::risk::classify;
use crate::types::Booking;

/// Returns whether `booking` satisfies every dimension of `criteria`.
///
/// An empty room-type set means the room-type filter has not been seeded
/// yet and matches every booking.
#[must_use]
pub fn passes(booking: &Booking, criteria: &FilterCriteria) -> bool {
    criteria.statuses.contains(&booking.status)
        && criteria
            .risk_levels
            .contains(&classify(booking.cancellation_prediction))
        && (criteria.room_types.is_empty()
            || criteria.room_types.contains(&booking.room_type_reserved))
}
