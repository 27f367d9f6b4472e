// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the keep-or-replace edit patch semantics.

use crate::{CityTourPatch, CoreError, FieldRejection, SkiTourPatch, TourPatch, apply_patch};
use tourbook_domain::{Difficulty, DomainError, Tour, TourKind};

use super::helpers::{create_city_tour, create_ski_tour};

#[test]
fn test_empty_patch_changes_nothing() {
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);
    let original: Tour = tour.clone();

    let rejections: Vec<FieldRejection> =
        apply_patch(&mut tour, &TourPatch::City(CityTourPatch::default())).unwrap();

    assert!(rejections.is_empty());
    assert_eq!(tour, original);
}

#[test]
fn test_free_text_fields_replace_unconditionally() {
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        country: Some(String::from("Poland")),
        city: Some(String::from("Krakow")),
        food: Some(String::from("Full board")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    assert!(rejections.is_empty());
    assert_eq!(tour.country(), "Poland");
    assert_eq!(tour.city(), "Krakow");
}

#[test]
fn test_invalid_date_keeps_old_value_with_rejection() {
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        departure_date: Some(String::from("2024-13-01")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    assert_eq!(tour.departure_date(), "2024-05-01");
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].field, "departure date");
    assert!(matches!(rejections[0].reason, DomainError::InvalidDate(_)));
}

#[test]
fn test_departure_after_return_is_rejected() {
    // Helper tours return on 2024-12-31.
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        departure_date: Some(String::from("2025-01-01")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    assert_eq!(tour.departure_date(), "2024-05-01");
    assert!(matches!(
        rejections[0].reason,
        DomainError::DateOrderViolation { .. }
    ));
}

#[test]
fn test_return_date_checks_against_updated_departure() {
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);

    // Move departure forward and try to move return behind it in the
    // same edit: the return check must see the new departure.
    let patch: TourPatch = TourPatch::City(CityTourPatch {
        departure_date: Some(String::from("2024-06-01")),
        return_date: Some(String::from("2024-05-15")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    assert_eq!(tour.departure_date(), "2024-06-01");
    assert_eq!(tour.return_date(), "2024-12-31");
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].field, "return date");
}

#[test]
fn test_each_field_fails_independently() {
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        city: Some(String::from("Odesa")),
        hotel_level: Some(String::from("9*")),
        price: Some(String::from("1250")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    // The bad hotel level is rejected; the city and price still apply.
    assert_eq!(tour.city(), "Odesa");
    assert_eq!(tour.hotel_level(), "3*");
    assert_eq!(tour.price(), 1250.0);
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].field, "hotel level");
}

#[test]
fn test_invalid_price_keeps_old_value() {
    let mut tour: Tour = create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0);

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        price: Some(String::from("-50")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    assert_eq!(tour.price(), 1000.0);
    assert!(matches!(rejections[0].reason, DomainError::InvalidPrice(_)));
}

#[test]
fn test_ski_patch_updates_difficulty_and_flags() {
    let mut tour: Tour = create_ski_tour("Austria", "Solden", "2024-01-10", 2200.0);

    let patch: TourPatch = TourPatch::Ski(SkiTourPatch {
        difficulty: Some(Difficulty::Hard),
        equipment_included: Some(false),
        ..SkiTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = apply_patch(&mut tour, &patch).unwrap();

    assert!(rejections.is_empty());
    assert_eq!(tour.hotel_level(), "Hard");
    match tour {
        Tour::Ski(ski) => {
            assert!(!ski.equipment_included);
            assert!(ski.insurance_included);
        }
        Tour::City(_) => panic!("variant changed during edit"),
    }
}

#[test]
fn test_patch_for_other_variant_is_rejected_without_mutation() {
    let mut tour: Tour = create_ski_tour("Austria", "Solden", "2024-01-10", 2200.0);
    let original: Tour = tour.clone();

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        country: Some(String::from("France")),
        ..CityTourPatch::default()
    });
    let result: Result<Vec<FieldRejection>, CoreError> = apply_patch(&mut tour, &patch);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::PatchMismatch {
            expected: TourKind::City,
            actual: TourKind::Ski,
        }
    ));
    assert_eq!(tour, original);
}
