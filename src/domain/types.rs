//! Strongly-typed value objects used by the catalog domain.
//!
//! Entity structs carry these wrappers instead of raw primitives so that
//! field-level invariants (presence, length bounds) are enforced at
//! construction and can never be silently violated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Minimum accepted length of a category name, in characters.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum accepted length of a category name, in characters.
pub const NAME_MAX_LEN: usize = 255;
/// Maximum accepted length of a category description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 10_000;

/// Errors produced when a field value violates a domain invariant.
///
/// Checks short-circuit, so every failed construction or mutation reports
/// exactly one violation, and always the first one in check order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only after trimming.
    #[error("{0} must not be empty or null")]
    Empty(&'static str),
    /// A text field was shorter than its minimum length.
    #[error("{0} must be at least {1} characters long")]
    TooShort(&'static str, usize),
    /// A text field exceeded its maximum length.
    #[error("{0} must be no more than {1} characters long")]
    TooLong(&'static str, usize),
    /// A required field was absent from the input.
    #[error("{0} must not be null")]
    Missing(&'static str),
}

/// Opaque unique identifier of a [`Category`](crate::domain::category::Category).
///
/// Assigned once at construction and immutable thereafter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Draws a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the raw [`Uuid`] backing this identifier.
    pub const fn get(self) -> Uuid {
        self.0
    }

    /// Whether this is the all-zero identifier. A constructed entity
    /// never carries one.
    pub const fn is_nil(self) -> bool {
        self.0.is_nil()
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CategoryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// Category display name: not empty or whitespace-only, 3 to 255
/// characters inclusive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Validates and wraps a name.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// emptiness (after trimming), then minimum length, then maximum
    /// length. Lengths are counted in characters, not bytes. The stored
    /// value is kept exactly as supplied; trimming is only part of the
    /// emptiness check.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        let len = value.chars().count();
        if len < NAME_MIN_LEN {
            return Err(ValidationError::TooShort("name", NAME_MIN_LEN));
        }
        if len > NAME_MAX_LEN {
            return Err(ValidationError::TooLong("name", NAME_MAX_LEN));
        }
        Ok(Self(value))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CategoryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryName> for &str {
    fn eq(&self, other: &CategoryName) -> bool {
        *self == other.as_str()
    }
}

/// Category description: may be empty but never absent, at most 10000
/// characters.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    /// Validates and wraps a present description. The empty string is a
    /// valid description.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ValidationError::TooLong("description", DESCRIPTION_MAX_LEN));
        }
        Ok(Self(value))
    }

    /// Validates an input where the description may be absent entirely.
    /// `None` models a missing/null payload field and is rejected.
    pub fn from_optional<S: Into<String>>(value: Option<S>) -> Result<Self, ValidationError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(ValidationError::Missing("description")),
        }
    }

    /// Borrow the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CategoryDescription {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryDescription {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryDescription {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryDescription> for String {
    fn from(value: CategoryDescription) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryDescription {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryDescription> for &str {
    fn eq(&self, other: &CategoryDescription) -> bool {
        *self == other.as_str()
    }
}
