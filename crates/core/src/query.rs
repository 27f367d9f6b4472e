// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::error::CoreError;
use tourbook_domain::Tour;

/// Checks whether a departure date falls inside an optional inclusive
/// range. An absent or empty bound is open on that side.
fn date_in_range(date: &str, from: Option<&str>, to: Option<&str>) -> bool {
    let ok_from: bool = from.is_none_or(|bound| bound.is_empty() || date >= bound);
    let ok_to: bool = to.is_none_or(|bound| bound.is_empty() || date <= bound);
    ok_from && ok_to
}

/// Searches for tours whose country matches `country` exactly.
///
/// Matches are returned as `(index, record)` views in original catalog
/// order. Zero matches is an error, not an empty success: callers that
/// reach this function have already established that a catalog is
/// loaded, so "nothing found" is a reportable lookup failure.
///
/// # Errors
///
/// Returns `CoreError::NoMatchForCountry` if no record matches.
pub fn search_by_country<'a>(
    catalog: &'a Catalog,
    country: &str,
) -> Result<Vec<(usize, &'a Tour)>, CoreError> {
    let matches: Vec<(usize, &Tour)> = catalog
        .tours()
        .iter()
        .enumerate()
        .filter(|(_, tour)| tour.country() == country)
        .collect();

    if matches.is_empty() {
        return Err(CoreError::NoMatchForCountry(country.to_string()));
    }
    Ok(matches)
}

/// Searches for tours whose city (or resort) matches `city` exactly.
///
/// # Errors
///
/// Returns `CoreError::NoMatchForCity` if no record matches.
pub fn search_by_city<'a>(
    catalog: &'a Catalog,
    city: &str,
) -> Result<Vec<(usize, &'a Tour)>, CoreError> {
    let matches: Vec<(usize, &Tour)> = catalog
        .tours()
        .iter()
        .enumerate()
        .filter(|(_, tour)| tour.city() == city)
        .collect();

    if matches.is_empty() {
        return Err(CoreError::NoMatchForCity(city.to_string()));
    }
    Ok(matches)
}

/// Searches for tours departing inside an inclusive date range.
///
/// Either bound may be absent or empty, which leaves that side open; a
/// fully open range matches every record.
///
/// # Errors
///
/// Returns `CoreError::NoMatchInDateRange` if no record departs inside
/// the range.
pub fn search_by_date_range<'a>(
    catalog: &'a Catalog,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Vec<(usize, &'a Tour)>, CoreError> {
    let matches: Vec<(usize, &Tour)> = catalog
        .tours()
        .iter()
        .enumerate()
        .filter(|(_, tour)| date_in_range(tour.departure_date(), from, to))
        .collect();

    if matches.is_empty() {
        return Err(CoreError::NoMatchInDateRange {
            from: from.map(ToString::to_string),
            to: to.map(ToString::to_string),
        });
    }
    Ok(matches)
}

/// Filters tours by exact hotel level (city) or difficulty (ski).
///
/// Unlike the searches, an empty result is a valid outcome here and is
/// returned as an empty sequence.
#[must_use]
pub fn filter_by_hotel_level<'a>(catalog: &'a Catalog, level: &str) -> Vec<(usize, &'a Tour)> {
    catalog
        .tours()
        .iter()
        .enumerate()
        .filter(|(_, tour)| tour.hotel_level() == level)
        .collect()
}

/// Filters tours whose price does not exceed `max_price` (inclusive).
///
/// An empty result is a valid outcome and is returned as an empty
/// sequence.
#[must_use]
pub fn filter_by_max_price(catalog: &Catalog, max_price: f64) -> Vec<(usize, &Tour)> {
    catalog
        .tours()
        .iter()
        .enumerate()
        .filter(|(_, tour)| tour.price() <= max_price)
        .collect()
}
