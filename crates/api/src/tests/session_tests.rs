// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the session context and its operations surface.

use crate::{ApiError, Session};
use tempfile::TempDir;
use tourbook::{CityTourPatch, CoreError, FieldRejection, TourPatch};
use tourbook_domain::{CityTour, DomainError, Tour};

use super::helpers::{create_city_tour, create_regular_user, create_session, create_ski_tour};

fn create_loaded_session(dir: &TempDir) -> Session {
    let mut session: Session = create_session(dir, create_regular_user());
    session.add(create_city_tour()).unwrap();
    session.add(create_ski_tour()).unwrap();
    session
}

#[test]
fn test_load_missing_file_falls_back_to_empty_catalog() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_loaded_session(&dir);

    let result: Result<(), ApiError> = session.load();

    assert!(matches!(result.unwrap_err(), ApiError::Storage(_)));
    // The previous in-memory records are gone; browsing continues
    // against an empty catalog.
    assert!(session.catalog().is_empty());
}

#[test]
fn test_save_then_load_round_trips_the_catalog() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_loaded_session(&dir);

    session.save().unwrap();
    session.load().unwrap();

    assert_eq!(session.list().len(), 2);
    assert_eq!(session.list()[0].city(), "Rome");
    assert_eq!(session.list()[1].city(), "Solden");
}

#[test]
fn test_add_validates_like_the_input_form() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_session(&dir, create_regular_user());

    let mut invalid: Tour = create_city_tour();
    if let Tour::City(CityTour { hotel_level, .. }) = &mut invalid {
        *hotel_level = String::from("9*");
    }
    let result: Result<(), ApiError> = session.add(invalid);

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Validation(DomainError::InvalidHotelLevel(_))
    ));
    assert!(session.catalog().is_empty());
}

#[test]
fn test_search_errors_surface_through_the_session() {
    let dir: TempDir = TempDir::new().unwrap();
    let session: Session = create_loaded_session(&dir);

    let result = session.search_by_country("Norway");

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Catalog(CoreError::NoMatchForCountry(_))
    ));
}

#[test]
fn test_filter_by_max_price_parses_the_raw_token() {
    let dir: TempDir = TempDir::new().unwrap();
    let session: Session = create_loaded_session(&dir);

    let matches: Vec<(usize, &Tour)> = session.filter_by_max_price("1500").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].1.city(), "Rome");

    let empty: Vec<(usize, &Tour)> = session.filter_by_max_price("0").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_filter_by_max_price_rejects_malformed_tokens() {
    let dir: TempDir = TempDir::new().unwrap();
    let session: Session = create_loaded_session(&dir);

    for raw in ["abc", "-10", "12x"] {
        let result = session.filter_by_max_price(raw);
        assert!(
            matches!(result.unwrap_err(), ApiError::Validation(_)),
            "token {raw} was not rejected"
        );
    }
}

#[test]
fn test_sorts_reorder_the_session_catalog() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_loaded_session(&dir);

    session.sort_by_price();
    assert_eq!(session.list()[0].city(), "Rome");

    session.sort_by_departure_date();
    assert_eq!(session.list()[0].city(), "Rome");
    assert_eq!(session.list()[1].city(), "Solden");
}

#[test]
fn test_edit_at_applies_and_reports_rejections() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_loaded_session(&dir);

    let patch: TourPatch = TourPatch::City(CityTourPatch {
        city: Some(String::from("Milan")),
        price: Some(String::from("not-a-price")),
        ..CityTourPatch::default()
    });
    let rejections: Vec<FieldRejection> = session.edit_at(0, &patch).unwrap();

    assert_eq!(session.list()[0].city(), "Milan");
    assert_eq!(session.list()[0].price(), 1500.0);
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].field, "price");
}

#[test]
fn test_edit_at_rejects_bad_indices() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_loaded_session(&dir);

    let patch: TourPatch = TourPatch::City(CityTourPatch::default());
    let result = session.edit_at(2, &patch);

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Catalog(CoreError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_delete_at_shifts_indices() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = create_loaded_session(&dir);

    let removed: Tour = session.delete_at(0).unwrap();

    assert_eq!(removed.city(), "Rome");
    assert_eq!(session.list().len(), 1);
    assert_eq!(session.list()[0].city(), "Solden");
}

#[test]
fn test_book_ticket_appends_to_the_ledger() {
    let dir: TempDir = TempDir::new().unwrap();
    let session: Session = create_loaded_session(&dir);

    session.book_ticket(1).unwrap();

    let content: String =
        std::fs::read_to_string(dir.path().join("tickets.txt")).unwrap();
    assert!(
        content
            .lines()
            .any(|line| line == "olena,Austria,Solden,2025-01-10,2025-01-17,2200")
    );
}

#[test]
fn test_book_ticket_checks_the_index_before_touching_the_ledger() {
    let dir: TempDir = TempDir::new().unwrap();
    let session: Session = create_loaded_session(&dir);

    let result: Result<(), ApiError> = session.book_ticket(5);

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Catalog(CoreError::IndexOutOfRange { index: 5, len: 2 })
    ));
    assert!(!dir.path().join("tickets.txt").exists());
}

#[test]
fn test_failed_save_keeps_memory_authoritative() {
    let dir: TempDir = TempDir::new().unwrap();
    let mut session: Session = Session::new(
        create_regular_user(),
        tourbook_persistence::TourFileStore::new(dir.path().join("missing").join("tours.csv")),
        tourbook_persistence::TicketLedger::new(dir.path().join("tickets.txt")),
    );
    session.add(create_city_tour()).unwrap();

    let result: Result<(), ApiError> = session.save();

    assert!(matches!(result.unwrap_err(), ApiError::Storage(_)));
    assert_eq!(session.list().len(), 1);
}
