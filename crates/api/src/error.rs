// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session and authentication boundary.

use crate::credential_policy::CredentialPolicyError;
use tourbook::CoreError;
use tourbook_domain::DomainError;
use tourbook_persistence::StorageError;

/// Authentication and authorization errors.
#[derive(Debug, PartialEq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The username is already registered.
    DuplicateUser(String),
    /// The account is protected and cannot be deleted.
    ProtectedUser(String),
    /// No account with this username exists.
    UserNotFound(String),
    /// New credentials violate the account file policy.
    CredentialPolicyViolation(CredentialPolicyError),
    /// The account file could not be accessed.
    Storage(StorageError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DuplicateUser(username) => {
                write!(f, "An account named '{username}' already exists")
            }
            Self::ProtectedUser(username) => {
                write!(f, "The '{username}' account cannot be deleted")
            }
            Self::UserNotFound(username) => {
                write!(f, "No account named '{username}' exists")
            }
            Self::CredentialPolicyViolation(err) => {
                write!(f, "Credential policy violation: {err}")
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<CredentialPolicyError> for AuthError {
    fn from(err: CredentialPolicyError) -> Self {
        Self::CredentialPolicyViolation(err)
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Session-level errors, one variant per recoverable failure kind.
///
/// Every variant is recoverable at the menu-loop boundary: the front
/// end reports it and keeps running, with the in-memory catalog
/// unchanged unless the operation says otherwise.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// A user-supplied value failed validation.
    Validation(DomainError),
    /// A catalog operation failed (bad index or empty search result).
    Catalog(CoreError),
    /// A backing file could not be read or written.
    Storage(StorageError),
    /// Authentication or authorization failed.
    Auth(AuthError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Auth(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Catalog(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}
