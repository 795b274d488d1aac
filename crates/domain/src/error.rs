// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting booking view inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A filter or sort value is outside its enumerated set.
    InvalidCriteria {
        /// The criteria field that was rejected (e.g. `sort_by`).
        field: &'static str,
        /// The rejected value as supplied by the caller.
        value: String,
    },
    /// Failed to parse a calendar date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCriteria { field, value } => {
                write!(f, "Invalid criteria: '{value}' is not a valid {field}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
