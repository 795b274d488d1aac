// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stayview_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A filter or sort value is outside its enumerated set.
    InvalidCriteria {
        /// The criteria field that was rejected.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCriteria { field, message } => {
                write!(f, "Invalid criteria for field '{field}': {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err, "date")
    }
}

/// Translates a domain error into an API error.
///
/// `date_field` names the request field a date parse failure is reported
/// against.
#[must_use]
pub fn translate_domain_error(err: DomainError, date_field: &str) -> ApiError {
    match err {
        DomainError::InvalidCriteria { field, value } => ApiError::InvalidCriteria {
            field: field.to_string(),
            message: format!("'{value}' is not a recognized value"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: date_field.to_string(),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}
