//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

use super::{ChangeLog, RecordId};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The user name was blank.
    #[error("name must not be empty")]
    EmptyName,
    /// The email was blank.
    #[error("email must not be empty")]
    EmptyEmail,
    /// The email was not shaped like an address.
    #[error("email must be a valid email")]
    InvalidEmail,
    /// The password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Email address, validated for shape on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap an email address.
    ///
    /// # Examples
    /// ```
    /// use recipe_api::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("cook@example.com").is_ok());
    /// assert!(EmailAddress::new("not-an-email").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email.validate_email() {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn check_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    Ok(())
}

fn check_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }
    Ok(())
}

/// Validated content for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: EmailAddress,
    password: String,
}

impl NewUser {
    /// Validate user content.
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        check_name(&name)?;
        let email = EmailAddress::new(email)?;
        let password = password.into();
        check_password(&password)?;
        Ok(Self {
            name,
            email,
            password,
        })
    }

    /// Attach an identifier, producing a stored user.
    #[must_use]
    pub fn with_id(self, id: RecordId) -> User {
        let Self {
            name,
            email,
            password,
        } = self;
        User {
            id,
            name,
            email,
            password,
        }
    }
}

/// Partial user update. Only the name and password are mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<String>,
    password: Option<String>,
}

impl UserPatch {
    /// Validate the supplied fields of a partial update.
    pub fn try_new(
        name: Option<String>,
        password: Option<String>,
    ) -> Result<Self, UserValidationError> {
        if let Some(name) = &name {
            check_name(name)?;
        }
        if let Some(password) = &password {
            check_password(password)?;
        }
        Ok(Self { name, password })
    }
}

/// Stored user.
///
/// ## Invariants
/// - `id` and `email` never change after the user is stored.
/// - `password` is kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: RecordId,
    name: String,
    email: EmailAddress,
    password: String,
}

impl User {
    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password as supplied at creation or last update.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Apply a partial update in place, returning what changed.
    pub fn apply(&mut self, patch: UserPatch) -> ChangeLog {
        let UserPatch { name, password } = patch;
        let mut changes = ChangeLog::default();
        changes.apply("name", &mut self.name, name);
        changes.apply("password", &mut self.password, password);
        changes
    }
}

/// Outcome of a successful user update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    /// The user after the update.
    pub user: User,
    /// Fields whose values differed.
    pub changes: ChangeLog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: RecordId,
    name: String,
    email: String,
    password: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email.into(),
            password: value.password,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            email,
            password,
        } = value;
        Ok(NewUser::try_new(name, email, password)?.with_id(id))
    }
}
