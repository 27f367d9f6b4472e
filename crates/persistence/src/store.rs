// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::codec::{decode_line, encode_line};
use crate::error::StorageError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tourbook::Catalog;
use tourbook_domain::Tour;
use tracing::{debug, warn};

/// The fixed header line written at the top of every catalog file.
pub const CATALOG_HEADER: &str = "type,data";

/// The file-backed catalog store.
///
/// Each operation opens its own handle and closes it before returning;
/// no handle is held across operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourFileStore {
    /// Path to the catalog file.
    path: PathBuf,
}

impl TourFileStore {
    /// Creates a store over the given catalog file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalog file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    /// Loads the full catalog from the backing file.
    ///
    /// The first line is discarded as a header, whatever it says.
    /// Blank lines are skipped. Lines with an unknown tag or a decode
    /// failure are logged and skipped; loading is best-effort per line
    /// and succeeds even if every record line is unreadable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::OpenFailed` if the file cannot be opened,
    /// `StorageError::EmptyFile` if it holds no lines at all, and
    /// `StorageError::ReadFailed` on an I/O error mid-file.
    pub fn load(&self) -> Result<Catalog, StorageError> {
        let file: File = File::open(&self.path).map_err(|err| StorageError::OpenFailed {
            path: self.path_string(),
            reason: err.to_string(),
        })?;
        let reader: BufReader<File> = BufReader::new(file);
        let mut lines = reader.lines();

        let header: Option<Result<String, std::io::Error>> = lines.next();
        match header {
            None => return Err(StorageError::EmptyFile(self.path_string())),
            Some(Err(err)) => {
                return Err(StorageError::ReadFailed {
                    path: self.path_string(),
                    reason: err.to_string(),
                });
            }
            Some(Ok(_)) => {}
        }

        let mut tours: Vec<Tour> = Vec::new();
        for line in lines {
            let line: String = line.map_err(|err| StorageError::ReadFailed {
                path: self.path_string(),
                reason: err.to_string(),
            })?;

            if line.is_empty() {
                continue;
            }

            match decode_line(&line) {
                Ok(tour) => tours.push(tour),
                Err(err) => warn!("Skipping catalog line: {err}"),
            }
        }

        debug!("Loaded {} tours from {}", tours.len(), self.path.display());
        Ok(Catalog::from_tours(tours))
    }

    /// Saves the full catalog as a snapshot, replacing the file.
    ///
    /// The file is truncated and rewritten: the fixed header first,
    /// then one tagged line per record in current catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::OpenFailed` if the file cannot be opened
    /// for writing and `StorageError::WriteFailed` on an I/O error.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let file: File = File::create(&self.path).map_err(|err| StorageError::OpenFailed {
            path: self.path_string(),
            reason: err.to_string(),
        })?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        let write_error = |err: std::io::Error| StorageError::WriteFailed {
            path: self.path_string(),
            reason: err.to_string(),
        };

        writeln!(writer, "{CATALOG_HEADER}").map_err(write_error)?;
        for tour in catalog.tours() {
            writeln!(writer, "{}", encode_line(tour)).map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;

        debug!("Saved {} tours to {}", catalog.len(), self.path.display());
        Ok(())
    }
}
