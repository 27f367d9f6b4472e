// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CityTour, Difficulty, SkiTour};
use std::str::FromStr;

/// Day counts per month for a non-leap year.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Validates that a string is a well-formed `YYYY-MM-DD` calendar date.
///
/// The shape is fixed-width: four digits, a dash, two digits, a dash,
/// two digits. The day is checked against the actual month length,
/// with February 29 allowed only in leap years (divisible by 4 and
/// either not divisible by 100 or divisible by 400).
///
/// # Arguments
///
/// * `date` - The candidate date string
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the shape or the calendar
/// values are wrong.
pub fn validate_date(date: &str) -> Result<(), DomainError> {
    let bytes: &[u8] = date.as_bytes();
    if bytes.len() != 10 {
        return Err(DomainError::InvalidDate(date.to_string()));
    }

    for (i, byte) in bytes.iter().enumerate() {
        if i == 4 || i == 7 {
            if *byte != b'-' {
                return Err(DomainError::InvalidDate(date.to_string()));
            }
        } else if !byte.is_ascii_digit() {
            return Err(DomainError::InvalidDate(date.to_string()));
        }
    }

    // The digit check above guarantees these parses succeed.
    let year: u32 = date[0..4]
        .parse()
        .map_err(|_| DomainError::InvalidDate(date.to_string()))?;
    let month: usize = date[5..7]
        .parse()
        .map_err(|_| DomainError::InvalidDate(date.to_string()))?;
    let day: u32 = date[8..10]
        .parse()
        .map_err(|_| DomainError::InvalidDate(date.to_string()))?;

    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidDate(date.to_string()));
    }

    let is_leap: bool = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    let max_day: u32 = if is_leap && month == 2 {
        29
    } else {
        DAYS_IN_MONTH[month - 1]
    };

    if day < 1 || day > max_day {
        return Err(DomainError::InvalidDate(date.to_string()));
    }

    Ok(())
}

/// Validates that a return date does not precede a departure date.
///
/// Lexical comparison is correct here: the fixed-width ISO form is
/// lexically ordered.
///
/// # Errors
///
/// Returns `DomainError::DateOrderViolation` if `return_date` is
/// strictly earlier than `departure`.
pub fn validate_date_order(departure: &str, return_date: &str) -> Result<(), DomainError> {
    if return_date < departure {
        return Err(DomainError::DateOrderViolation {
            departure: departure.to_string(),
            return_date: return_date.to_string(),
        });
    }
    Ok(())
}

/// Validates a hotel star level of the form `1*` through `5*`.
///
/// The value must end in `*`, every leading character must be a digit,
/// and the numeric value must fall in 1..=5.
///
/// # Errors
///
/// Returns `DomainError::InvalidHotelLevel` for any other shape.
pub fn validate_hotel_level(level: &str) -> Result<(), DomainError> {
    let Some(digits) = level.strip_suffix('*') else {
        return Err(DomainError::InvalidHotelLevel(level.to_string()));
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidHotelLevel(level.to_string()));
    }

    let stars: u32 = digits
        .parse()
        .map_err(|_| DomainError::InvalidHotelLevel(level.to_string()))?;

    if !(1..=5).contains(&stars) {
        return Err(DomainError::InvalidHotelLevel(level.to_string()));
    }

    Ok(())
}

/// Parses a user-supplied price token strictly.
///
/// The whole token must parse as a finite real number with no trailing
/// characters, and the value must be non-negative. This is the
/// interactive-input rule; catalog file decoding is deliberately more
/// permissive.
///
/// # Arguments
///
/// * `text` - The raw price token
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the token does not parse or
/// the value is negative or non-finite.
pub fn parse_price(text: &str) -> Result<f64, DomainError> {
    let value: f64 = text
        .parse()
        .map_err(|_| DomainError::InvalidPrice(text.to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidPrice(text.to_string()));
    }

    Ok(value)
}

/// Validates a complete city tour against the interactive-input rules.
///
/// # Errors
///
/// Returns the first violated rule: malformed dates, return before
/// departure, malformed hotel level, or a negative price.
pub fn validate_city_tour(tour: &CityTour) -> Result<(), DomainError> {
    validate_date(&tour.departure_date)?;
    validate_date(&tour.return_date)?;
    validate_date_order(&tour.departure_date, &tour.return_date)?;
    validate_hotel_level(&tour.hotel_level)?;

    if !tour.price.is_finite() || tour.price < 0.0 {
        return Err(DomainError::InvalidPrice(tour.price.to_string()));
    }

    Ok(())
}

/// Validates a complete ski tour against the interactive-input rules.
///
/// # Errors
///
/// Returns the first violated rule: malformed dates, return before
/// departure, an unknown difficulty tier, or a negative price.
pub fn validate_ski_tour(tour: &SkiTour) -> Result<(), DomainError> {
    validate_date(&tour.departure_date)?;
    validate_date(&tour.return_date)?;
    validate_date_order(&tour.departure_date, &tour.return_date)?;
    Difficulty::from_str(&tour.difficulty)?;

    if !tour.price.is_finite() || tour.price < 0.0 {
        return Err(DomainError::InvalidPrice(tour.price.to_string()));
    }

    Ok(())
}
