// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StorageError;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// The account file gateway.
///
/// Accounts live in a headerless plaintext file of `username:password`
/// lines. The first colon separates the two, so passwords may contain
/// colons but usernames may not; lines without a colon are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStore {
    /// Path to the account file.
    path: PathBuf,
}

impl AccountStore {
    /// Creates a store over the given account file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the account file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads all non-empty lines of the account file.
    fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        let file: File = File::open(&self.path).map_err(|err| StorageError::OpenFailed {
            path: self.path_string(),
            reason: err.to_string(),
        })?;

        let mut lines: Vec<String> = Vec::new();
        for line in BufReader::new(file).lines() {
            let line: String = line.map_err(|err| StorageError::ReadFailed {
                path: self.path_string(),
                reason: err.to_string(),
            })?;
            if !line.is_empty() {
                lines.push(line);
            }
        }
        Ok(lines)
    }

    /// Checks a username/password pair against the account file.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the account file cannot be read.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, StorageError> {
        let lines: Vec<String> = self.read_lines()?;
        Ok(lines.iter().any(|line| {
            line.split_once(':')
                .is_some_and(|(user, pass)| user == username && pass == password)
        }))
    }

    /// Lists every registered username in file order.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the account file cannot be read.
    pub fn usernames(&self) -> Result<Vec<String>, StorageError> {
        let lines: Vec<String> = self.read_lines()?;
        Ok(lines
            .iter()
            .filter_map(|line| line.split_once(':'))
            .map(|(user, _)| user.to_string())
            .collect())
    }

    /// Appends a new account unless the username is already taken.
    ///
    /// Returns `false` without writing when the username exists.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the account file cannot be read or
    /// appended to.
    pub fn add(&self, username: &str, password: &str) -> Result<bool, StorageError> {
        let existing: Vec<String> = self.usernames()?;
        if existing.iter().any(|user| user == username) {
            return Ok(false);
        }

        let mut file: File = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| StorageError::OpenFailed {
                path: self.path_string(),
                reason: err.to_string(),
            })?;

        writeln!(file, "{username}:{password}").map_err(|err| StorageError::WriteFailed {
            path: self.path_string(),
            reason: err.to_string(),
        })?;

        info!("Registered account '{username}'");
        Ok(true)
    }

    /// Removes an account by username, rewriting the file without it.
    ///
    /// Returns `false` without writing when no such username exists.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the account file cannot be read or
    /// rewritten.
    pub fn remove(&self, username: &str) -> Result<bool, StorageError> {
        let lines: Vec<String> = self.read_lines()?;

        let mut found: bool = false;
        let mut kept: Vec<&String> = Vec::new();
        for line in &lines {
            let matches: bool = line
                .split_once(':')
                .is_some_and(|(user, _)| user == username);
            if matches {
                found = true;
            } else {
                kept.push(line);
            }
        }

        if !found {
            return Ok(false);
        }

        let file: File = File::create(&self.path).map_err(|err| StorageError::OpenFailed {
            path: self.path_string(),
            reason: err.to_string(),
        })?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        let write_error = |err: std::io::Error| StorageError::WriteFailed {
            path: self.path_string(),
            reason: err.to_string(),
        };

        for line in kept {
            writeln!(writer, "{line}").map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;

        info!("Removed account '{username}'");
        Ok(true)
    }
}
