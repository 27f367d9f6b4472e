// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tourbook_domain::{DomainError, TourKind};

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A positional index does not address a catalog entry.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current catalog size.
        len: usize,
    },
    /// A country search matched nothing.
    NoMatchForCountry(String),
    /// A city/resort search matched nothing.
    NoMatchForCity(String),
    /// A departure date range search matched nothing.
    NoMatchInDateRange {
        /// Inclusive lower bound, open if absent.
        from: Option<String>,
        /// Inclusive upper bound, open if absent.
        to: Option<String>,
    },
    /// An edit patch targets the other tour variant.
    PatchMismatch {
        /// The variant the patch was built for.
        expected: TourKind,
        /// The variant actually stored at the index.
        actual: TourKind,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "No tour at index {index}: the catalog holds {len} tours")
            }
            Self::NoMatchForCountry(country) => {
                write!(f, "No tours found for country '{country}'")
            }
            Self::NoMatchForCity(city) => {
                write!(f, "No tours found for city or resort '{city}'")
            }
            Self::NoMatchInDateRange { from, to } => {
                write!(
                    f,
                    "No tours depart between '{}' and '{}'",
                    from.as_deref().unwrap_or("open"),
                    to.as_deref().unwrap_or("open")
                )
            }
            Self::PatchMismatch { expected, actual } => {
                write!(f, "Cannot apply a {expected} tour edit to a {actual} tour")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
