// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod edit;
mod error;
mod query;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use catalog::Catalog;
pub use edit::{CityTourPatch, FieldRejection, SkiTourPatch, TourPatch, apply_patch};
pub use error::CoreError;
pub use query::{
    filter_by_hotel_level, filter_by_max_price, search_by_city, search_by_country,
    search_by_date_range,
};
