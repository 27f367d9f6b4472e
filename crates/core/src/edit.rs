// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-by-field tour editing.
//!
//! An edit is expressed as a patch: one optional replacement per field,
//! collected by the front end. Applying a patch never fails partway:
//! every field independently either passes validation and replaces the
//! old value, or is rejected and the old value is kept. Rejections are
//! reported back so the front end can warn about each one.

use crate::error::CoreError;
use tourbook_domain::{
    CityTour, Difficulty, DomainError, SkiTour, Tour, parse_price, validate_date,
    validate_hotel_level,
};

/// A per-field update for a city tour. `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityTourPatch {
    /// Replacement country.
    pub country: Option<String>,
    /// Replacement city.
    pub city: Option<String>,
    /// Replacement accommodation description.
    pub accommodation: Option<String>,
    /// Replacement transport description.
    pub transport: Option<String>,
    /// Replacement departure date, validated on apply.
    pub departure_date: Option<String>,
    /// Replacement return date, validated on apply.
    pub return_date: Option<String>,
    /// Replacement hotel level, validated on apply.
    pub hotel_level: Option<String>,
    /// Replacement meals description.
    pub food: Option<String>,
    /// Replacement extras description.
    pub extras: Option<String>,
    /// Replacement price as the raw input token, validated on apply.
    pub price: Option<String>,
}

/// A per-field update for a ski tour. `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkiTourPatch {
    /// Replacement country.
    pub country: Option<String>,
    /// Replacement resort.
    pub resort: Option<String>,
    /// Replacement difficulty tier, already constrained by the menu.
    pub difficulty: Option<Difficulty>,
    /// Replacement equipment flag.
    pub equipment_included: Option<bool>,
    /// Replacement insurance flag.
    pub insurance_included: Option<bool>,
    /// Replacement departure date, validated on apply.
    pub departure_date: Option<String>,
    /// Replacement return date, validated on apply.
    pub return_date: Option<String>,
    /// Replacement price as the raw input token, validated on apply.
    pub price: Option<String>,
}

/// An edit patch for either tour variant.
#[derive(Debug, Clone, PartialEq)]
pub enum TourPatch {
    /// Updates for a city tour.
    City(CityTourPatch),
    /// Updates for a ski tour.
    Ski(SkiTourPatch),
}

/// One field whose replacement value was rejected during an edit.
///
/// The old value stays in place; the front end reports the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRejection {
    /// The field whose replacement was rejected.
    pub field: &'static str,
    /// Why the replacement was rejected.
    pub reason: DomainError,
}

impl FieldRejection {
    const fn new(field: &'static str, reason: DomainError) -> Self {
        Self { field, reason }
    }
}

/// Applies a new departure date if it is well-formed and does not land
/// after the current return date. The return date seen here may already
/// be the patched one when the caller applies fields in return-first
/// order; this function only ever compares against whatever is current.
fn apply_departure_date(
    departure: &mut String,
    return_date: &str,
    replacement: &str,
    rejections: &mut Vec<FieldRejection>,
) {
    if let Err(reason) = validate_date(replacement) {
        rejections.push(FieldRejection::new("departure date", reason));
        return;
    }
    if !return_date.is_empty() && replacement > return_date {
        rejections.push(FieldRejection::new(
            "departure date",
            DomainError::DateOrderViolation {
                departure: replacement.to_string(),
                return_date: return_date.to_string(),
            },
        ));
        return;
    }
    replacement.clone_into(departure);
}

/// Applies a new return date if it is well-formed and does not precede
/// the current (possibly just-updated) departure date.
fn apply_return_date(
    return_date: &mut String,
    departure: &str,
    replacement: &str,
    rejections: &mut Vec<FieldRejection>,
) {
    if let Err(reason) = validate_date(replacement) {
        rejections.push(FieldRejection::new("return date", reason));
        return;
    }
    if !departure.is_empty() && replacement < departure {
        rejections.push(FieldRejection::new(
            "return date",
            DomainError::DateOrderViolation {
                departure: departure.to_string(),
                return_date: replacement.to_string(),
            },
        ));
        return;
    }
    replacement.clone_into(return_date);
}

/// Applies a new price if the raw token parses as a non-negative real.
fn apply_price(price: &mut f64, replacement: &str, rejections: &mut Vec<FieldRejection>) {
    match parse_price(replacement) {
        Ok(value) => *price = value,
        Err(reason) => rejections.push(FieldRejection::new("price", reason)),
    }
}

fn apply_city_patch(tour: &mut CityTour, patch: &CityTourPatch) -> Vec<FieldRejection> {
    let mut rejections: Vec<FieldRejection> = Vec::new();

    if let Some(country) = &patch.country {
        country.clone_into(&mut tour.country);
    }
    if let Some(city) = &patch.city {
        city.clone_into(&mut tour.city);
    }
    if let Some(accommodation) = &patch.accommodation {
        accommodation.clone_into(&mut tour.accommodation);
    }
    if let Some(transport) = &patch.transport {
        transport.clone_into(&mut tour.transport);
    }
    if let Some(departure) = &patch.departure_date {
        apply_departure_date(
            &mut tour.departure_date,
            &tour.return_date,
            departure,
            &mut rejections,
        );
    }
    if let Some(return_date) = &patch.return_date {
        apply_return_date(
            &mut tour.return_date,
            &tour.departure_date,
            return_date,
            &mut rejections,
        );
    }
    if let Some(level) = &patch.hotel_level {
        match validate_hotel_level(level) {
            Ok(()) => level.clone_into(&mut tour.hotel_level),
            Err(reason) => rejections.push(FieldRejection::new("hotel level", reason)),
        }
    }
    if let Some(food) = &patch.food {
        food.clone_into(&mut tour.food);
    }
    if let Some(extras) = &patch.extras {
        extras.clone_into(&mut tour.extras);
    }
    if let Some(price) = &patch.price {
        apply_price(&mut tour.price, price, &mut rejections);
    }

    rejections
}

fn apply_ski_patch(tour: &mut SkiTour, patch: &SkiTourPatch) -> Vec<FieldRejection> {
    let mut rejections: Vec<FieldRejection> = Vec::new();

    if let Some(country) = &patch.country {
        country.clone_into(&mut tour.country);
    }
    if let Some(resort) = &patch.resort {
        resort.clone_into(&mut tour.resort);
    }
    if let Some(difficulty) = patch.difficulty {
        tour.difficulty = difficulty.as_str().to_string();
    }
    if let Some(equipment) = patch.equipment_included {
        tour.equipment_included = equipment;
    }
    if let Some(insurance) = patch.insurance_included {
        tour.insurance_included = insurance;
    }
    if let Some(departure) = &patch.departure_date {
        apply_departure_date(
            &mut tour.departure_date,
            &tour.return_date,
            departure,
            &mut rejections,
        );
    }
    if let Some(return_date) = &patch.return_date {
        apply_return_date(
            &mut tour.return_date,
            &tour.departure_date,
            return_date,
            &mut rejections,
        );
    }
    if let Some(price) = &patch.price {
        apply_price(&mut tour.price, price, &mut rejections);
    }

    rejections
}

/// Applies an edit patch to a tour record in place.
///
/// Fields are applied in display order. Free-text fields always take
/// the replacement; validated fields (dates, hotel level, price) keep
/// the old value when the replacement fails validation and the failure
/// is recorded in the returned list. Date ordering is cross-checked
/// against whichever value of the other date is current at check time,
/// so a departure change is compared against the old return date and a
/// return change against the possibly-updated departure.
///
/// # Arguments
///
/// * `tour` - The record to edit
/// * `patch` - The replacements collected by the front end
///
/// # Errors
///
/// Returns `CoreError::PatchMismatch` without touching the record if
/// the patch was built for the other variant.
pub fn apply_patch(tour: &mut Tour, patch: &TourPatch) -> Result<Vec<FieldRejection>, CoreError> {
    match (tour, patch) {
        (Tour::City(tour), TourPatch::City(patch)) => Ok(apply_city_patch(tour, patch)),
        (Tour::Ski(tour), TourPatch::Ski(patch)) => Ok(apply_ski_patch(tour, patch)),
        (tour, TourPatch::City(_)) => Err(CoreError::PatchMismatch {
            expected: tourbook_domain::TourKind::City,
            actual: tour.kind(),
        }),
        (tour, TourPatch::Ski(_)) => Err(CoreError::PatchMismatch {
            expected: tourbook_domain::TourKind::Ski,
            actual: tour.kind(),
        }),
    }
}
