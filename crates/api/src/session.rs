// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use tourbook::{
    Catalog, FieldRejection, TourPatch, apply_patch, filter_by_hotel_level, filter_by_max_price,
    search_by_city, search_by_country, search_by_date_range,
};
use tourbook_domain::{Tour, parse_price, validate_city_tour, validate_ski_tour};
use tourbook_persistence::{TicketLedger, TourFileStore};
use tracing::warn;

/// One logged-in console session.
///
/// The session context carries the current user, the in-memory catalog
/// and the file gateways, and exposes the full operations surface a
/// front end drives. Operations run synchronously; each one completes
/// before the next is accepted, and every file operation opens and
/// closes its own handle.
#[derive(Debug)]
pub struct Session {
    /// The authenticated user driving this session.
    user: AuthenticatedUser,
    /// The in-memory catalog, authoritative between saves.
    catalog: Catalog,
    /// The catalog file gateway.
    store: TourFileStore,
    /// The booking ledger gateway.
    ledger: TicketLedger,
}

impl Session {
    /// Creates a session with an empty catalog.
    #[must_use]
    pub const fn new(user: AuthenticatedUser, store: TourFileStore, ledger: TicketLedger) -> Self {
        Self {
            user,
            catalog: Catalog::new(),
            store,
            ledger,
        }
    }

    /// Returns the authenticated user.
    #[must_use]
    pub const fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    /// Returns the current catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the in-memory catalog with the backing file contents.
    ///
    /// On a storage failure the session falls back to an empty catalog
    /// so browsing keeps working, and the error is still surfaced for
    /// the front end to report.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the catalog file cannot be
    /// opened or read.
    pub fn load(&mut self) -> Result<(), ApiError> {
        match self.store.load() {
            Ok(catalog) => {
                self.catalog = catalog;
                Ok(())
            }
            Err(err) => {
                warn!("Catalog load failed, continuing with an empty catalog: {err}");
                self.catalog = Catalog::new();
                Err(ApiError::Storage(err))
            }
        }
    }

    /// Writes the in-memory catalog to the backing file as a full
    /// snapshot.
    ///
    /// On failure the in-memory catalog stays authoritative and
    /// unchanged, so a later retry can still persist it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the catalog file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ApiError> {
        self.store.save(&self.catalog)?;
        Ok(())
    }

    /// Appends a validated tour to the catalog.
    ///
    /// The record passes the interactive-input rules before it is
    /// accepted; this is the programmatic equivalent of the input
    /// form, not of the permissive file decoder.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the record violates a field
    /// rule.
    pub fn add(&mut self, tour: Tour) -> Result<(), ApiError> {
        match &tour {
            Tour::City(city) => validate_city_tour(city)?,
            Tour::Ski(ski) => validate_ski_tour(ski)?,
        }
        self.catalog.add(tour);
        Ok(())
    }

    /// Returns the catalog records in canonical order.
    #[must_use]
    pub fn list(&self) -> &[Tour] {
        self.catalog.tours()
    }

    /// Searches tours by exact country match.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Catalog` when nothing matches.
    pub fn search_by_country(&self, country: &str) -> Result<Vec<(usize, &Tour)>, ApiError> {
        Ok(search_by_country(&self.catalog, country)?)
    }

    /// Searches tours by exact city or resort match.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Catalog` when nothing matches.
    pub fn search_by_city(&self, city: &str) -> Result<Vec<(usize, &Tour)>, ApiError> {
        Ok(search_by_city(&self.catalog, city)?)
    }

    /// Searches tours departing inside an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Catalog` when nothing matches.
    pub fn search_by_date_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<(usize, &Tour)>, ApiError> {
        Ok(search_by_date_range(&self.catalog, from, to)?)
    }

    /// Sorts the catalog by ascending price, permanently for the
    /// session.
    pub fn sort_by_price(&mut self) {
        self.catalog.sort_by_price();
    }

    /// Sorts the catalog by ascending departure date, permanently for
    /// the session.
    pub fn sort_by_departure_date(&mut self) {
        self.catalog.sort_by_departure_date();
    }

    /// Filters tours by exact hotel level or difficulty. An empty
    /// result is valid.
    #[must_use]
    pub fn filter_by_hotel_level(&self, level: &str) -> Vec<(usize, &Tour)> {
        filter_by_hotel_level(&self.catalog, level)
    }

    /// Filters tours by an inclusive maximum price given as the raw
    /// input token. An empty result is valid.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the token is not a
    /// non-negative number.
    pub fn filter_by_max_price(&self, raw: &str) -> Result<Vec<(usize, &Tour)>, ApiError> {
        let max_price: f64 = parse_price(raw)?;
        Ok(filter_by_max_price(&self.catalog, max_price))
    }

    /// Applies an edit patch to the tour at `index`.
    ///
    /// Returns the per-field rejections for the front end to report;
    /// rejected fields keep their old values.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Catalog` if the index is out of range or the
    /// patch targets the other variant.
    pub fn edit_at(
        &mut self,
        index: usize,
        patch: &TourPatch,
    ) -> Result<Vec<FieldRejection>, ApiError> {
        let tour: &mut Tour = self.catalog.tour_mut(index)?;
        Ok(apply_patch(tour, patch)?)
    }

    /// Deletes and returns the tour at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Catalog` if the index is out of range.
    pub fn delete_at(&mut self, index: usize) -> Result<Tour, ApiError> {
        Ok(self.catalog.delete_at(index)?)
    }

    /// Books the tour at `index` for the session user, appending one
    /// line to the ticket ledger.
    ///
    /// The index is validated before the ledger file is touched.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Catalog` for an invalid index and
    /// `ApiError::Storage` if the ledger cannot be written.
    pub fn book_ticket(&self, index: usize) -> Result<(), ApiError> {
        let tour: &Tour = self.catalog.get(index).ok_or(
            tourbook::CoreError::IndexOutOfRange {
                index,
                len: self.catalog.len(),
            },
        )?;

        self.ledger.book(&self.user.username, tour)?;
        Ok(())
    }
}
