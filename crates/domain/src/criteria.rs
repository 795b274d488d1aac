// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filter and sort criteria for the bookings view.

use crate::error::DomainError;
use crate::risk::RiskLevel;
use crate::types::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// The active filter state.
///
/// A booking is shown only if it matches all three dimensions; each
/// dimension accepts any of its selected values. An empty `room_types` set
/// places no restriction on room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Statuses to show.
    pub statuses: BTreeSet<BookingStatus>,
    /// Risk levels to show.
    pub risk_levels: BTreeSet<RiskLevel>,
    /// Room types to show; empty means any.
    pub room_types: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            statuses: BookingStatus::ALL.into_iter().collect(),
            risk_levels: RiskLevel::ALL.into_iter().collect(),
            room_types: BTreeSet::new(),
        }
    }
}

/// Room-type filter selection with explicit initialization.
///
/// The selection starts `Uninitialized` and is seeded with every room type
/// found in the first non-empty booking collection it observes. Later
/// observations never reseed it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomTypeFilter {
    /// No non-empty collection has been observed yet.
    #[default]
    Uninitialized,
    /// The operator's current selection.
    Initialized(BTreeSet<String>),
}

impl RoomTypeFilter {
    /// Seeds the selection from `bookings` if this is the first non-empty
    /// collection observed. Returns `true` if the state changed.
    pub fn observe(&mut self, bookings: &[Booking]) -> bool {
        if matches!(self, Self::Initialized(_)) || bookings.is_empty() {
            return false;
        }
        *self = Self::Initialized(discover_room_types(bookings).into_iter().collect());
        true
    }

    /// Selects or deselects a room type. Has no effect before initialization.
    pub fn toggle(&mut self, room_type: &str, selected: bool) {
        if let Self::Initialized(set) = self {
            if selected {
                set.insert(room_type.to_string());
            } else {
                set.remove(room_type);
            }
        }
    }

    /// Returns whether the selection has been seeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized(_))
    }

    /// Returns the set to place in [`FilterCriteria::room_types`].
    #[must_use]
    pub fn as_criteria_set(&self) -> BTreeSet<String> {
        match self {
            Self::Uninitialized => BTreeSet::new(),
            Self::Initialized(set) => set.clone(),
        }
    }
}

/// Returns the distinct room types in `bookings`, in order of first appearance.
#[must_use]
pub fn discover_room_types(bookings: &[Booking]) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    bookings
        .iter()
        .filter(|b| seen.insert(b.room_type_reserved.as_str()))
        .map(|b| b.room_type_reserved.clone())
        .collect()
}

/// Column the bookings view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Id,
    User,
    RoomType,
    Price,
    Prediction,
    Status,
}

impl SortKey {
    /// Converts this key to its wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::User => "user",
            Self::RoomType => "room_type",
            Self::Price => "price",
            Self::Prediction => "prediction",
            Self::Status => "status",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "user" => Ok(Self::User),
            "room_type" => Ok(Self::RoomType),
            "price" => Ok(Self::Price),
            "prediction" => Ok(Self::Prediction),
            "status" => Ok(Self::Status),
            _ => Err(DomainError::InvalidCriteria {
                field: "sort_by",
                value: s.to_string(),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Converts this order to its wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::InvalidCriteria {
                field: "sort_order",
                value: s.to_string(),
            }),
        }
    }
}

/// Sort column and direction. Defaults to newest id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSpec {
    /// Column to sort by.
    pub sort_by: SortKey,
    /// Direction.
    pub sort_order: SortOrder,
}

impl SortSpec {
    /// Creates a sort spec.
    #[must_use]
    pub const fn new(sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }
}
