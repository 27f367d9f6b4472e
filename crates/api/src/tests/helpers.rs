// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AuthService, AuthenticatedUser, Session};
use tempfile::TempDir;
use tourbook_domain::{CityTour, SkiTour, Tour};
use tourbook_persistence::{AccountStore, TicketLedger, TourFileStore};

pub fn create_auth_service(dir: &TempDir) -> AuthService {
    let path = dir.path().join("users.txt");
    std::fs::write(&path, "admin:root\nolena:pass123\n").unwrap();
    AuthService::new(AccountStore::new(path))
}

pub fn create_admin() -> AuthenticatedUser {
    AuthenticatedUser::new(String::from("admin"))
}

pub fn create_regular_user() -> AuthenticatedUser {
    AuthenticatedUser::new(String::from("olena"))
}

pub fn create_session(dir: &TempDir, user: AuthenticatedUser) -> Session {
    Session::new(
        user,
        TourFileStore::new(dir.path().join("tours.csv")),
        TicketLedger::new(dir.path().join("tickets.txt")),
    )
}

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
        2200.0,
    ))
}
