// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization over the account file.

use crate::credential_policy::CredentialPolicy;
use crate::error::AuthError;
use tourbook_persistence::AccountStore;
use tracing::info;

/// The distinguished administrator username.
///
/// Role assignment is by name convention: the `admin` account is the
/// administrator, every other account is a regular user. The account
/// is non-deletable.
pub const ADMIN_USERNAME: &str = "admin";

/// Roles for authenticated users.
///
/// Roles gate the user-administration operations and decide which
/// console menu a session is offered; catalog queries are open to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The administrator: manages the catalog and the accounts.
    Admin,
    /// A regular user: browses the catalog and books tickets.
    User,
}

impl Role {
    /// Returns the display name of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

/// A logged-in user with an assigned role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The account username.
    pub username: String,
    /// The role derived from the username.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates an authenticated user, deriving the role from the
    /// username convention.
    #[must_use]
    pub fn new(username: String) -> Self {
        let role: Role = if username == ADMIN_USERNAME {
            Role::Admin
        } else {
            Role::User
        };
        Self { username, role }
    }

    /// Returns whether this user holds the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authentication and user-administration service.
///
/// Wraps the account store with credential checks, role assignment and
/// per-action authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthService {
    /// The account file gateway.
    accounts: AccountStore,
}

impl AuthService {
    /// Creates a service over the given account store.
    #[must_use]
    pub const fn new(accounts: AccountStore) -> Self {
        Self { accounts }
    }

    /// Checks that an actor may administer accounts.
    ///
    /// Only Admin users may list, add or delete accounts.
    fn authorize_manage_users(actor: &AuthenticatedUser, action: &str) -> Result<(), AuthError> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: Role::Admin.as_str().to_string(),
            })
        }
    }

    /// Authenticates a username/password pair.
    ///
    /// # Arguments
    ///
    /// * `username` - The account username
    /// * `password` - The account password
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for an unknown
    /// username or wrong password and `AuthError::Storage` if the
    /// account file cannot be read.
    pub fn login(&self, username: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        if !self.accounts.verify(username, password)? {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("unknown username or wrong password"),
            });
        }

        let user: AuthenticatedUser = AuthenticatedUser::new(username.to_string());
        info!("Logged in '{}' as {}", user.username, user.role.as_str());
        Ok(user)
    }

    /// Lists every registered username.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for non-admin actors and
    /// `AuthError::Storage` if the account file cannot be read.
    pub fn list_users(&self, actor: &AuthenticatedUser) -> Result<Vec<String>, AuthError> {
        Self::authorize_manage_users(actor, "list_users")?;
        Ok(self.accounts.usernames()?)
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for non-admin actors,
    /// `AuthError::CredentialPolicyViolation` for credentials that
    /// would corrupt the account file, `AuthError::DuplicateUser` if
    /// the username is taken, and `AuthError::Storage` on file errors.
    pub fn add_user(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        Self::authorize_manage_users(actor, "add_user")?;
        CredentialPolicy::validate(username, password)?;

        if !self.accounts.add(username, password)? {
            return Err(AuthError::DuplicateUser(username.to_string()));
        }
        Ok(())
    }

    /// Deletes an account by username.
    ///
    /// The `admin` account is protected and can never be deleted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for non-admin actors,
    /// `AuthError::ProtectedUser` for the admin account,
    /// `AuthError::UserNotFound` if no such account exists, and
    /// `AuthError::Storage` on file errors.
    pub fn delete_user(&self, actor: &AuthenticatedUser, username: &str) -> Result<(), AuthError> {
        Self::authorize_manage_users(actor, "delete_user")?;

        if username == ADMIN_USERNAME {
            return Err(AuthError::ProtectedUser(username.to_string()));
        }

        if !self.accounts.remove(username)? {
            return Err(AuthError::UserNotFound(username.to_string()));
        }
        Ok(())
    }
}
