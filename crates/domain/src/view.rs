// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bookings view pipeline.
//!
//! Produces the filtered, sorted sequence shown to an operator. The
//! pipeline holds no state: callers invoke [`render`] again whenever the
//! bookings, criteria or sort spec change.
//!
//! ## Invariants
//!
//! - Every returned booking passes the filter; every omitted one fails it
//! - The sort is stable, so ties keep their input order
//! - The input collection is never mutated

use crate::criteria::{FilterCriteria, SortSpec};
use crate::filter::passes;
use crate::ordering::BookingComparator;
use crate::types::Booking;

/// Filters `bookings` by `criteria`, then stably sorts by `spec`.
#[must_use]
pub fn render(bookings: &[Booking], criteria: &FilterCriteria, spec: SortSpec) -> Vec<Booking> {
    let mut visible: Vec<Booking> = bookings
        .iter()
        .filter(|b| passes(b, criteria))
        .cloned()
        .collect();

    let mut comparator: BookingComparator = BookingComparator::new(spec);
    visible.sort_by(|a, b| comparator.compare(a, b));
    visible
}
