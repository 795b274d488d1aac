// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cancellation risk classification.
//!
//! Maps the backend's cancellation probability to one of four ordinal labels.
//!
//! ## Thresholds (inclusive lower bounds)
//!
//! - absent or exactly `0` → `Unknown`
//! - `p >= 0.7` → `High`
//! - `0.4 <= p < 0.7` → `Medium`
//! - `0 < p < 0.4` → `Low`
//!
//! A score of exactly `0` cannot be told apart from "not yet scored".

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lower bound (inclusive) of the `High` band.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Lower bound (inclusive) of the `Medium` band.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

/// Risk label derived from a cancellation probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Unknown,
}

impl RiskLevel {
    /// Every risk level, in display order.
    pub const ALL: [Self; 4] = [Self::High, Self::Medium, Self::Low, Self::Unknown];

    /// Converts this level to its wire label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(DomainError::InvalidCriteria {
                field: "risk_level",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a cancellation probability.
#[must_use]
pub fn classify(prediction: Option<f64>) -> RiskLevel {
    match prediction {
        None => RiskLevel::Unknown,
        Some(p) if p == 0.0 => RiskLevel::Unknown,
        Some(p) if p >= HIGH_RISK_THRESHOLD => RiskLevel::High,
        Some(p) if p >= MEDIUM_RISK_THRESHOLD => RiskLevel::Medium,
        Some(_) => RiskLevel::Low,
    }
}
