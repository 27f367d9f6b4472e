// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tourbook_domain::{CityTour, SkiTour, Tour};

pub fn create_city_tour() -> Tour {
    Tour::City(CityTour::new(
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
    ))
}

pub fn create_ski_tour() -> Tour {
    Tour::Ski(SkiTour::new(
        String::from("Austria"),
        String::from("Solden"),
        String::from("Medium"),
        true,
        false,
        String::from("2025-01-10"),
        String::from("2025-01-17"),
        999.99,
    ))
}
