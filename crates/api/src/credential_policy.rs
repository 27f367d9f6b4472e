// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential policy validation.
//!
//! The account file is colon-delimited with one record per line, so a
//! username containing `:` or either value containing a line break
//! would corrupt the file on the next append. The policy rejects such
//! values before they reach the store.

use thiserror::Error;

/// Credential policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialPolicyError {
    /// A credential value is empty.
    #[error("{field} must not be empty")]
    Empty {
        /// The offending field, `username` or `password`.
        field: &'static str,
    },

    /// A username contains the record separator.
    #[error("{field} must not contain ':'")]
    ContainsSeparator {
        /// The offending field.
        field: &'static str,
    },

    /// A credential value spans multiple lines.
    #[error("{field} must not contain line breaks")]
    ContainsLineBreak {
        /// The offending field.
        field: &'static str,
    },
}

/// Policy checks applied to new account credentials.
pub struct CredentialPolicy;

impl CredentialPolicy {
    /// Validates a username/password pair for storage in the account
    /// file.
    ///
    /// Both values must be non-empty and single-line; the username
    /// additionally must not contain `:`. Passwords may contain colons
    /// because only the first colon on a line delimits the record.
    ///
    /// # Errors
    ///
    /// Returns a `CredentialPolicyError` naming the first violating
    /// field.
    pub fn validate(username: &str, password: &str) -> Result<(), CredentialPolicyError> {
        if username.is_empty() {
            return Err(CredentialPolicyError::Empty { field: "username" });
        }
        if username.contains(':') {
            return Err(CredentialPolicyError::ContainsSeparator { field: "username" });
        }
        if username.contains('\n') || username.contains('\r') {
            return Err(CredentialPolicyError::ContainsLineBreak { field: "username" });
        }

        if password.is_empty() {
            return Err(CredentialPolicyError::Empty { field: "password" });
        }
        if password.contains('\n') || password.contains('\r') {
            return Err(CredentialPolicyError::ContainsLineBreak { field: "password" });
        }

        Ok(())
    }
}
