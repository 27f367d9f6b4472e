// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tourbook_domain::TourKind;

/// Errors that can occur while reading or writing the backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A file could not be opened.
    OpenFailed {
        /// The file path.
        path: String,
        /// The operating system error.
        reason: String,
    },
    /// A file could not be read.
    ReadFailed {
        /// The file path.
        path: String,
        /// The operating system error.
        reason: String,
    },
    /// A file could not be written.
    WriteFailed {
        /// The file path.
        path: String,
        /// The operating system error.
        reason: String,
    },
    /// The catalog file holds no lines at all, not even a header.
    EmptyFile(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenFailed { path, reason } => {
                write!(f, "Could not open file '{path}': {reason}")
            }
            Self::ReadFailed { path, reason } => {
                write!(f, "Could not read file '{path}': {reason}")
            }
            Self::WriteFailed { path, reason } => {
                write!(f, "Could not write file '{path}': {reason}")
            }
            Self::EmptyFile(path) => {
                write!(f, "Catalog file '{path}' is empty")
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Errors that can occur while decoding one catalog file line.
///
/// Decoding checks field presence and price parsability only. Dates,
/// hotel levels, difficulty strings and price signs are deliberately
/// not re-validated, so historical records load even when they predate
/// the current input rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required field is absent from the line.
    MissingField {
        /// The variant being decoded.
        kind: TourKind,
        /// The first field that was not present.
        field: &'static str,
    },
    /// The trailing price token holds no number at all.
    InvalidPrice {
        /// The variant being decoded.
        kind: TourKind,
        /// The offending token.
        value: String,
    },
    /// The line's leading type tag names no known variant.
    UnknownKind(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { kind, field } => {
                write!(f, "Missing field '{field}' in a {kind} tour line")
            }
            Self::InvalidPrice { kind, value } => {
                write!(f, "Invalid price '{value}' in a {kind} tour line")
            }
            Self::UnknownKind(tag) => {
                write!(f, "Unknown tour type tag '{tag}'")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
