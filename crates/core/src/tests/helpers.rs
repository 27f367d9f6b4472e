// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Catalog;
use tourbook_domain::{CityTour, SkiTour, Tour};

pub fn create_city_tour(country: &str, city: &str, departure: &str, price: f64) -> Tour {
    Tour::City(CityTour::new(
        String::from(country),
        String::from(city),
        String::from("Central hotel"),
        String::from("Plane"),
        String::from(departure),
        String::from("2024-12-31"),
        String::from("3*"),
        String::from("Breakfast"),
        String::from("City pass"),
        price,
    ))
}

pub fn create_ski_tour(country: &str, resort: &str, departure: &str, price: f64) -> Tour {
    Tour::Ski(SkiTour::new(
        String::from(country),
        String::from(resort),
        String::from("Medium"),
        true,
        true,
        String::from(departure),
        String::from("2024-12-31"),
        price,
    ))
}

/// Three tours: Kyiv city (1000), Bukovel ski (2500), Rome city (1800).
pub fn create_test_catalog() -> Catalog {
    let mut catalog: Catalog = Catalog::new();
    catalog.add(create_city_tour("Ukraine", "Kyiv", "2024-05-01", 1000.0));
    catalog.add(create_ski_tour("Ukraine", "Bukovel", "2024-01-15", 2500.0));
    catalog.add(create_city_tour("Italy", "Rome", "2024-07-20", 1800.0));
    catalog
}
