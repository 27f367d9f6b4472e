// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interactive input and edit forms for tour records.
//!
//! Input forms re-prompt until every validated field passes. Edit
//! forms show the current value per field; an empty line keeps it.
//! Raw replacement values for dates, hotel level and price go into the
//! patch as typed, so the core edit logic decides keep-or-replace and
//! reports rejections uniformly.

use crate::input::read_line;
use tourbook::{CityTourPatch, SkiTourPatch};
use tourbook_domain::{
    CityTour, Difficulty, SkiTour, parse_price, validate_date, validate_date_order,
    validate_hotel_level,
};

/// Prompts until a well-formed date is entered.
fn read_valid_date(prompt: &str) -> Option<String> {
    loop {
        let date: String = read_line(prompt)?;
        if validate_date(&date).is_ok() {
            return Some(date);
        }
        println!("Invalid date format. Use YYYY-MM-DD, for example 2024-05-17.");
    }
}

/// Prompts until a return date on or after `departure` is entered.
fn read_return_date(departure: &str) -> Option<String> {
    loop {
        let date: String = read_valid_date("Return date (YYYY-MM-DD): ")?;
        if validate_date_order(departure, &date).is_ok() {
            return Some(date);
        }
        println!("The return date cannot precede the departure date.");
    }
}

/// Prompts until a valid hotel level is entered.
fn read_hotel_level() -> Option<String> {
    loop {
        let level: String = read_line("Hotel level (for example 3*): ")?;
        if validate_hotel_level(&level).is_ok() {
            return Some(level);
        }
        println!("Invalid hotel level. Use a value like 3*, 4* or 5*.");
    }
}

/// Prompts until a non-negative price is entered.
fn read_price(prompt: &str) -> Option<f64> {
    loop {
        let raw: String = read_line(prompt)?;
        match parse_price(&raw) {
            Ok(price) => return Some(price),
            Err(_) => {
                println!("Invalid price. Enter a non-negative number such as 12345 or 999.99.");
            }
        }
    }
}

/// Prompts until one of the difficulty tiers is chosen.
fn read_difficulty() -> Option<Difficulty> {
    loop {
        let choice: String =
            read_line("Difficulty:\n 1. Easy\n 2. Medium\n 3. Hard\nChoice: ")?;
        match choice.as_str() {
            "1" => return Some(Difficulty::Easy),
            "2" => return Some(Difficulty::Medium),
            "3" => return Some(Difficulty::Hard),
            _ => println!("Invalid choice. Enter 1, 2 or 3."),
        }
    }
}

/// Prompts until a yes/no choice is made.
fn read_yes_no(question: &str) -> Option<bool> {
    loop {
        let choice: String = read_line(&format!("{question}\n 1. Yes\n 2. No\nChoice: "))?;
        match choice.as_str() {
            "1" => return Some(true),
            "2" => return Some(false),
            _ => println!("Invalid choice. Enter 1 or 2."),
        }
    }
}

/// Reads a complete city tour from the console.
///
/// Returns `None` if input ends mid-form.
pub fn input_city_tour() -> Option<CityTour> {
    let country: String = read_line("Country: ")?;
    let city: String = read_line("City: ")?;
    let accommodation: String = read_line("Accommodation: ")?;
    let transport: String = read_line("Transport: ")?;
    let departure_date: String = read_valid_date("Departure date (YYYY-MM-DD): ")?;
    let return_date: String = read_return_date(&departure_date)?;
    let hotel_level: String = read_hotel_level()?;
    let food: String = read_line("Food: ")?;
    let extras: String = read_line("Extras: ")?;
    let price: f64 = read_price("Package price: ")?;

    Some(CityTour::new(
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
    ))
}

/// Reads a complete ski tour from the console.
///
/// Returns `None` if input ends mid-form.
pub fn input_ski_tour() -> Option<SkiTour> {
    let country: String = read_line("Country: ")?;
    let resort: String = read_line("Ski resort: ")?;
    let difficulty: Difficulty = read_difficulty()?;
    let equipment_included: bool = read_yes_no("Equipment included?")?;
    let insurance_included: bool = read_yes_no("Insurance included?")?;
    let departure_date: String = read_valid_date("Departure date (YYYY-MM-DD): ")?;
    let return_date: String = read_return_date(&departure_date)?;
    let price: f64 = read_price("Tour price: ")?;

    Some(SkiTour::new(
        country,
        resort,
        difficulty.as_str().to_string(),
        equipment_included,
        insurance_included,
        departure_date,
        return_date,
        price,
    ))
}

/// Prompts for one optional replacement value. Empty input keeps the
/// old value.
fn read_replacement(field: &str, current: &str) -> Option<Option<String>> {
    let line: String = read_line(&format!("{field} ({current}): "))?;
    if line.is_empty() {
        Some(None)
    } else {
        Some(Some(line))
    }
}

/// Collects an edit patch for a city tour.
///
/// Returns `None` if input ends mid-form.
pub fn edit_city_patch(current: &CityTour) -> Option<CityTourPatch> {
    println!("Editing the city tour. Leave a field empty to keep it unchanged.");

    Some(CityTourPatch {
        country: read_replacement("Country", &current.country)?,
        city: read_replacement("City", &current.city)?,
        accommodation: read_replacement("Accommodation", &current.accommodation)?,
        transport: read_replacement("Transport", &current.transport)?,
        departure_date: read_replacement("Departure date", &current.departure_date)?,
        return_date: read_replacement("Return date", &current.return_date)?,
        hotel_level: read_replacement("Hotel level", &current.hotel_level)?,
        food: read_replacement("Food", &current.food)?,
        extras: read_replacement("Extras", &current.extras)?,
        price: read_replacement("Price", &current.price.to_string())?,
    })
}

/// Collects an edit patch for a ski tour.
///
/// Returns `None` if input ends mid-form.
pub fn edit_ski_patch(current: &SkiTour) -> Option<SkiTourPatch> {
    println!("Editing the ski tour. Leave a field empty to keep it unchanged.");

    let country: Option<String> = read_replacement("Country", &current.country)?;
    let resort: Option<String> = read_replacement("Resort", &current.resort)?;

    let difficulty_line: String = read_line(&format!(
        "Difficulty (current: {}). Enter 1-Easy, 2-Medium, 3-Hard or leave empty: ",
        current.difficulty
    ))?;
    let difficulty: Option<Difficulty> = match difficulty_line.as_str() {
        "" => None,
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Hard),
        _ => {
            println!("Invalid choice. Difficulty kept unchanged.");
            None
        }
    };

    let equipment_included: Option<bool> =
        read_flag_replacement("Equipment included", current.equipment_included)?;
    let insurance_included: Option<bool> =
        read_flag_replacement("Insurance included", current.insurance_included)?;

    Some(SkiTourPatch {
        country,
        resort,
        difficulty,
        equipment_included,
        insurance_included,
        departure_date: read_replacement("Departure date", &current.departure_date)?,
        return_date: read_replacement("Return date", &current.return_date)?,
        price: read_replacement("Price", &current.price.to_string())?,
    })
}

/// Prompts for an optional boolean replacement. Empty input keeps the
/// old value; an unrecognized choice also keeps it, with a warning.
fn read_flag_replacement(field: &str, current: bool) -> Option<Option<bool>> {
    let shown: &str = if current { "yes" } else { "no" };
    let line: String = read_line(&format!(
        "{field} (current: {shown}). Enter 1-Yes, 2-No or leave empty: "
    ))?;
    match line.as_str() {
        "" => Some(None),
        "1" => Some(Some(true)),
        "2" => Some(Some(false)),
        _ => {
            println!("Invalid choice. {field} kept unchanged.");
            Some(None)
        }
    }
}
