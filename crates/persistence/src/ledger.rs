// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tourbook_domain::Tour;
use tracing::info;

/// The header line written once at the top of the booking ledger.
pub const TICKET_HEADER: &str = "username,country,city,departureDate,returnDate,price";

/// The append-only booking ledger.
///
/// Every booking appends one summary line. Bookings are not
/// deduplicated: booking the same tour twice records two lines, and no
/// inventory is decremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLedger {
    /// Path to the ledger file.
    path: PathBuf,
}

impl TicketLedger {
    /// Creates a ledger over the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the ledger file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one booking line for `username` and the given tour.
    ///
    /// The header line is written first when the ledger is empty at
    /// open time, so it appears exactly once across any number of
    /// bookings.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::OpenFailed` if the ledger cannot be
    /// opened for append and `StorageError::WriteFailed` on an I/O
    /// error.
    pub fn book(&self, username: &str, tour: &Tour) -> Result<(), StorageError> {
        let path: String = self.path.display().to_string();

        let mut file: File = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| StorageError::OpenFailed {
                path: path.clone(),
                reason: err.to_string(),
            })?;

        let write_error = |err: std::io::Error| StorageError::WriteFailed {
            path: path.clone(),
            reason: err.to_string(),
        };

        let is_empty: bool = file.metadata().map_err(write_error)?.len() == 0;
        if is_empty {
            writeln!(file, "{TICKET_HEADER}").map_err(write_error)?;
        }

        writeln!(
            file,
            "{},{},{},{},{},{}",
            username,
            tour.country(),
            tour.city(),
            tour.departure_date(),
            tour.return_date(),
            tour.price()
        )
        .map_err(write_error)?;

        info!("Recorded booking of '{}' for {username}", tour.city());
        Ok(())
    }
}
