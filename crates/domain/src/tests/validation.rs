// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CityTour, DomainError, SkiTour, parse_price, validate_city_tour, validate_date,
    validate_date_order, validate_hotel_level, validate_ski_tour,
};

fn create_test_city_tour() -> CityTour {
    CityTour::new(
        String::from("Italy"),
        String::from("Rome"),
        String::from("Hotel Roma"),
        String::from("Plane"),
        String::from("2024-05-01"),
        String::from("2024-05-08"),
        String::from("4*"),
        String::from("Breakfast"),
        String::from("Guided walks"),
        1500.0,
    )
}

fn create_test_ski_tour() -> SkiTour {
    SkiTour::new(
        String::from("Austria"),
        String::from("Solden"),
        String::from("Medium"),
        true,
        false,
        String::from("2025-01-10"),
        String::from("2025-01-17"),
        2200.0,
    )
}

#[test]
fn test_validate_date_accepts_regular_date() {
    assert!(validate_date("2024-05-17").is_ok());
}

#[test]
fn test_validate_date_accepts_leap_day_in_leap_year() {
    assert!(validate_date("2024-02-29").is_ok());
}

#[test]
fn test_validate_date_rejects_leap_day_in_common_year() {
    let result: Result<(), DomainError> = validate_date("2023-02-29");

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), DomainError::InvalidDate(_)));
}

#[test]
fn test_validate_date_accepts_leap_day_in_year_divisible_by_400() {
    assert!(validate_date("2000-02-29").is_ok());
}

#[test]
fn test_validate_date_rejects_leap_day_in_century_year() {
    assert!(validate_date("1900-02-29").is_err());
}

#[test]
fn test_validate_date_rejects_month_out_of_range() {
    assert!(validate_date("2024-13-01").is_err());
    assert!(validate_date("2024-00-01").is_err());
}

#[test]
fn test_validate_date_rejects_day_out_of_range() {
    assert!(validate_date("2024-04-31").is_err());
    assert!(validate_date("2024-01-00").is_err());
}

#[test]
fn test_validate_date_rejects_wrong_separators() {
    assert!(validate_date("20240101").is_err());
    assert!(validate_date("2024/01/01").is_err());
    assert!(validate_date("2024-01_01").is_err());
}

#[test]
fn test_validate_date_rejects_wrong_length() {
    assert!(validate_date("2024-1-01").is_err());
    assert!(validate_date("2024-01-015").is_err());
    assert!(validate_date("").is_err());
}

#[test]
fn test_validate_date_order_accepts_equal_dates() {
    assert!(validate_date_order("2024-05-01", "2024-05-01").is_ok());
}

#[test]
fn test_validate_date_order_rejects_return_before_departure() {
    let result: Result<(), DomainError> = validate_date_order("2024-05-08", "2024-05-01");

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::DateOrderViolation { .. }
    ));
}

#[test]
fn test_validate_hotel_level_accepts_all_star_counts() {
    for level in ["1*", "2*", "3*", "4*", "5*"] {
        assert!(validate_hotel_level(level).is_ok(), "rejected {level}");
    }
}

#[test]
fn test_validate_hotel_level_rejects_out_of_range_stars() {
    assert!(validate_hotel_level("0*").is_err());
    assert!(validate_hotel_level("6*").is_err());
    assert!(validate_hotel_level("10*").is_err());
}

#[test]
fn test_validate_hotel_level_rejects_missing_star_suffix() {
    assert!(validate_hotel_level("3").is_err());
    assert!(validate_hotel_level("*").is_err());
    assert!(validate_hotel_level("").is_err());
}

#[test]
fn test_validate_hotel_level_rejects_non_digit_prefix() {
    assert!(validate_hotel_level("a*").is_err());
    assert!(validate_hotel_level("3a*").is_err());
    assert!(validate_hotel_level("-3*").is_err());
}

#[test]
fn test_parse_price_accepts_integers_and_decimals() {
    assert_eq!(parse_price("12345").unwrap(), 12345.0);
    assert_eq!(parse_price("999.99").unwrap(), 999.99);
    assert_eq!(parse_price("0").unwrap(), 0.0);
}

#[test]
fn test_parse_price_rejects_negative_value() {
    let result: Result<f64, DomainError> = parse_price("-1");

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), DomainError::InvalidPrice(_)));
}

#[test]
fn test_parse_price_rejects_trailing_characters() {
    assert!(parse_price("123abc").is_err());
    assert!(parse_price("12,5").is_err());
}

#[test]
fn test_parse_price_rejects_empty_and_non_numeric() {
    assert!(parse_price("").is_err());
    assert!(parse_price("free").is_err());
}

#[test]
fn test_validate_city_tour_accepts_valid_tour() {
    let tour: CityTour = create_test_city_tour();

    assert!(validate_city_tour(&tour).is_ok());
}

#[test]
fn test_validate_city_tour_rejects_bad_hotel_level() {
    let mut tour: CityTour = create_test_city_tour();
    tour.hotel_level = String::from("7*");

    let result: Result<(), DomainError> = validate_city_tour(&tour);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidHotelLevel(_)
    ));
}

#[test]
fn test_validate_city_tour_rejects_reversed_dates() {
    let mut tour: CityTour = create_test_city_tour();
    tour.departure_date = String::from("2024-06-01");

    assert!(matches!(
        validate_city_tour(&tour).unwrap_err(),
        DomainError::DateOrderViolation { .. }
    ));
}

#[test]
fn test_validate_ski_tour_accepts_valid_tour() {
    let tour: SkiTour = create_test_ski_tour();

    assert!(validate_ski_tour(&tour).is_ok());
}

#[test]
fn test_validate_ski_tour_rejects_unknown_difficulty() {
    let mut tour: SkiTour = create_test_ski_tour();
    tour.difficulty = String::from("Extreme");

    assert!(matches!(
        validate_ski_tour(&tour).unwrap_err(),
        DomainError::InvalidDifficulty(_)
    ));
}

#[test]
fn test_validate_ski_tour_rejects_negative_price() {
    let mut tour: SkiTour = create_test_ski_tour();
    tour.price = -0.5;

    assert!(matches!(
        validate_ski_tour(&tour).unwrap_err(),
        DomainError::InvalidPrice(_)
    ));
}
