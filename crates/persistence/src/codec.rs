// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The catalog line codec.
//!
//! One record per line, fields comma-joined in a fixed per-variant
//! order, booleans as `1`/`0`. Nothing is quoted or escaped: a comma
//! inside a free-text field will shift every later column on the next
//! decode. That matches the historical file format exactly and is kept
//! on purpose.

use crate::error::DecodeError;
use tourbook_domain::{CityTour, SkiTour, Tour, TourKind};

/// City tour field order in the catalog file.
const CITY_FIELDS: [&str; 10] = [
    "country",
    "city",
    "accommodation",
    "transport",
    "departure_date",
    "return_date",
    "hotel_level",
    "food",
    "extras",
    "price",
];

/// Ski tour field order in the catalog file.
const SKI_FIELDS: [&str; 8] = [
    "country",
    "resort",
    "difficulty",
    "equipment_included",
    "insurance_included",
    "departure_date",
    "return_date",
    "price",
];

/// Splits a line remainder into at most `count` positional fields.
///
/// The final field takes the whole rest of the line, commas included,
/// mirroring how the original format reads its trailing price token.
fn split_fields(rest: &str, count: usize) -> Vec<&str> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.splitn(count, ',').collect()
}

/// Parses a price token the way the historical loader did: the longest
/// leading prefix that is a number wins, trailing characters are
/// ignored, and the sign is accepted as stored.
fn parse_price_lenient(token: &str) -> Option<f64> {
    let trimmed: &str = token.trim_start();
    let boundaries: Vec<usize> = trimmed
        .char_indices()
        .map(|(index, _)| index)
        .skip(1)
        .chain(std::iter::once(trimmed.len()))
        .collect();

    for end in boundaries.into_iter().rev() {
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            return Some(value);
        }
    }
    None
}

fn decode_city(rest: &str) -> Result<CityTour, DecodeError> {
    let parts: Vec<&str> = split_fields(rest, CITY_FIELDS.len());
    if parts.len() < CITY_FIELDS.len() {
        return Err(DecodeError::MissingField {
            kind: TourKind::City,
            field: CITY_FIELDS[parts.len()],
        });
    }

    let price: f64 = parse_price_lenient(parts[9]).ok_or_else(|| DecodeError::InvalidPrice {
        kind: TourKind::City,
        value: parts[9].to_string(),
    })?;

    Ok(CityTour::new(
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
        parts[3].to_string(),
        parts[4].to_string(),
        parts[5].to_string(),
        parts[6].to_string(),
        parts[7].to_string(),
        parts[8].to_string(),
        price,
    ))
}

fn decode_ski(rest: &str) -> Result<SkiTour, DecodeError> {
    let parts: Vec<&str> = split_fields(rest, SKI_FIELDS.len());
    if parts.len() < SKI_FIELDS.len() {
        return Err(DecodeError::MissingField {
            kind: TourKind::Ski,
            field: SKI_FIELDS[parts.len()],
        });
    }

    let price: f64 = parse_price_lenient(parts[7]).ok_or_else(|| DecodeError::InvalidPrice {
        kind: TourKind::Ski,
        value: parts[7].to_string(),
    })?;

    Ok(SkiTour::new(
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
        parts[3] == "1",
        parts[4] == "1",
        parts[5].to_string(),
        parts[6].to_string(),
        price,
    ))
}

/// Decodes one catalog file line into a tour record.
///
/// The text before the first comma is the variant tag; the remainder
/// holds the positional fields.
///
/// # Errors
///
/// Returns `DecodeError::UnknownKind` for an unrecognized tag,
/// `DecodeError::MissingField` when the line has fewer fields than the
/// variant requires, and `DecodeError::InvalidPrice` when the trailing
/// token holds no number.
pub fn decode_line(line: &str) -> Result<Tour, DecodeError> {
    let (tag, rest): (&str, &str) = line.split_once(',').unwrap_or((line, ""));

    match tag {
        "city" => decode_city(rest).map(Tour::City),
        "ski" => decode_ski(rest).map(Tour::Ski),
        _ => Err(DecodeError::UnknownKind(tag.to_string())),
    }
}

/// Encodes a record's fields as one comma-joined string, without the
/// variant tag.
#[must_use]
pub fn encode_fields(tour: &Tour) -> String {
    match tour {
        Tour::City(tour) => format!(
            "{},{},{},{},{},{},{},{},{},{}",
            tour.country,
            tour.city,
            tour.accommodation,
            tour.transport,
            tour.departure_date,
            tour.return_date,
            tour.hotel_level,
            tour.food,
            tour.extras,
            tour.price
        ),
        Tour::Ski(tour) => format!(
            "{},{},{},{},{},{},{},{}",
            tour.country,
            tour.resort,
            tour.difficulty,
            u8::from(tour.equipment_included),
            u8::from(tour.insurance_included),
            tour.departure_date,
            tour.return_date,
            tour.price
        ),
    }
}

/// Encodes a record as a full catalog file line, variant tag included.
#[must_use]
pub fn encode_line(tour: &Tour) -> String {
    format!("{},{}", tour.kind().as_str(), encode_fields(tour))
}
