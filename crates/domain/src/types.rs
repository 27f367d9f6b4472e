// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies which concrete tour variant a record is.
///
/// The kind doubles as the type tag written in front of every catalog
/// file line (`city,...` / `ski,...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourKind {
    /// A city sightseeing package.
    City,
    /// A ski resort package.
    Ski,
}

impl TourKind {
    /// Converts this kind to its catalog file tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Ski => "ski",
        }
    }
}

impl std::fmt::Display for TourKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slope difficulty tier offered for ski tours.
///
/// Interactive input and edit only accept these three tiers. The
/// `difficulty` field on [`SkiTour`] itself stays a free string so that
/// records loaded from historical catalog files are accepted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Beginner-friendly slopes.
    Easy,
    /// Intermediate slopes.
    Medium,
    /// Expert slopes.
    Hard,
}

impl Difficulty {
    /// Converts this difficulty to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            _ => Err(DomainError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A city sightseeing tour record.
///
/// All free-text fields are unconstrained strings. The dates, hotel
/// level, and price are validated on interactive input and edit only;
/// records decoded from the catalog file are accepted as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTour {
    /// Destination country.
    pub country: String,
    /// Destination city.
    pub city: String,
    /// Accommodation description.
    pub accommodation: String,
    /// Transport description.
    pub transport: String,
    /// Departure date in `YYYY-MM-DD` form.
    pub departure_date: String,
    /// Return date in `YYYY-MM-DD` form.
    pub return_date: String,
    /// Hotel star level, `1*` through `5*`.
    pub hotel_level: String,
    /// Included meals description.
    pub food: String,
    /// Extra perks description.
    pub extras: String,
    /// Package price, non-negative.
    pub price: f64,
}

impl CityTour {
    /// Creates a new `CityTour` from its field values.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        country: String,
        city: String,
        accommodation: String,
        transport: String,
        departure_date: String,
        return_date: String,
        hotel_level: String,
        food: String,
        extras: String,
        price: f64,
    ) -> Self {
        Self {
            country,
            city,
            accommodation,
            transport,
            departure_date,
            return_date,
            hotel_level,
            food,
            extras,
            price,
        }
    }
}

/// A ski resort tour record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkiTour {
    /// Destination country.
    pub country: String,
    /// Resort name.
    pub resort: String,
    /// Slope difficulty. Interactive input restricts this to the
    /// [`Difficulty`] tiers; loaded records keep whatever the file says.
    pub difficulty: String,
    /// Whether ski equipment rental is included.
    pub equipment_included: bool,
    /// Whether travel insurance is included.
    pub insurance_included: bool,
    /// Departure date in `YYYY-MM-DD` form.
    pub departure_date: String,
    /// Return date in `YYYY-MM-DD` form.
    pub return_date: String,
    /// Package price, non-negative.
    pub price: f64,
}

impl SkiTour {
    /// Creates a new `SkiTour` from its field values.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        country: String,
        resort: String,
        difficulty: String,
        equipment_included: bool,
        insurance_included: bool,
        departure_date: String,
        return_date: String,
        price: f64,
    ) -> Self {
        Self {
            country,
            resort,
            difficulty,
            equipment_included,
            insurance_included,
            departure_date,
            return_date,
            price,
        }
    }
}

/// One purchasable travel package, either variant.
///
/// The variant tag is explicit, so save-time re-tagging needs no
/// downcasting: the catalog store asks for [`Tour::kind`] and writes the
/// matching file tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tour {
    /// A city sightseeing package.
    City(CityTour),
    /// A ski resort package.
    Ski(SkiTour),
}

impl Tour {
    /// Returns which variant this tour is.
    #[must_use]
    pub const fn kind(&self) -> TourKind {
        match self {
            Self::City(_) => TourKind::City,
            Self::Ski(_) => TourKind::Ski,
        }
    }

    /// Returns the destination country.
    #[must_use]
    pub fn country(&self) -> &str {
        match self {
            Self::City(tour) => &tour.country,
            Self::Ski(tour) => &tour.country,
        }
    }

    /// Returns the destination city, or the resort name for ski tours.
    #[must_use]
    pub fn city(&self) -> &str {
        match self {
            Self::City(tour) => &tour.city,
            Self::Ski(tour) => &tour.resort,
        }
    }

    /// Returns the departure date string.
    #[must_use]
    pub fn departure_date(&self) -> &str {
        match self {
            Self::City(tour) => &tour.departure_date,
            Self::Ski(tour) => &tour.departure_date,
        }
    }

    /// Returns the return date string.
    #[must_use]
    pub fn return_date(&self) -> &str {
        match self {
            Self::City(tour) => &tour.return_date,
            Self::Ski(tour) => &tour.return_date,
        }
    }

    /// Returns the package price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        match self {
            Self::City(tour) => tour.price,
            Self::Ski(tour) => tour.price,
        }
    }

    /// Returns the hotel star level, or the difficulty tier for ski tours.
    ///
    /// The field is semantically overloaded on purpose: the level filter
    /// matches either value with one exact string comparison.
    #[must_use]
    pub fn hotel_level(&self) -> &str {
        match self {
            Self::City(tour) => &tour.hotel_level,
            Self::Ski(tour) => &tour.difficulty,
        }
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City(tour) => write!(
                f,
                "[CITY] {}, {} | {} -> {} | {} | {} UAH",
                tour.country,
                tour.city,
                tour.departure_date,
                tour.return_date,
                tour.hotel_level,
                tour.price
            ),
            Self::Ski(tour) => write!(
                f,
                "[SKI] {}, {} | difficulty: {} | equipment: {} | insurance: {} | {} -> {} | {} UAH",
                tour.country,
                tour.resort,
                tour.difficulty,
                if tour.equipment_included { "yes" } else { "no" },
                if tour.insurance_included { "yes" } else { "no" },
                tour.departure_date,
                tour.return_date,
                tour.price
            ),
        }
    }
}
