//! The [`Category`] entity: a named, describable, activatable
//! classification used by the media catalog.
//!
//! Every constructor and every mutator validates the affected fields, so
//! no `Category` with a broken invariant is ever observable. Mutators
//! validate a candidate state first and commit only on success; a failed
//! call leaves the entity exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryDescription, CategoryId, CategoryName, ValidationError};

/// A catalog classification with identity, lifecycle flag and validated
/// text fields.
///
/// `id` and `created_at` are assigned once at construction and have no
/// mutator. Equality is identity-based: two categories are equal exactly
/// when their ids are equal, regardless of attribute values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    description: CategoryDescription,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl Category {
    /// Creates an active category with a fresh id, stamped with the
    /// current time.
    ///
    /// `description` is required but may be the empty string; `None`
    /// models an absent/null input and is rejected.
    pub fn new(name: &str, description: Option<&str>) -> Result<Self, ValidationError> {
        Self::new_with_active(name, description, true)
    }

    /// Same as [`Self::new`] with an explicit activation flag.
    pub fn new_with_active(
        name: &str,
        description: Option<&str>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        Self::new_with_active_at(name, description, is_active, Utc::now())
    }

    /// Fully-parameterized constructor taking the creation timestamp from
    /// the caller instead of the wall clock.
    ///
    /// Validation runs in a fixed field order (name, then description)
    /// and reports the first violation; on error no entity exists.
    pub fn new_with_active_at(
        name: &str,
        description: Option<&str>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = CategoryName::new(name)?;
        let description = CategoryDescription::from_optional(description)?;

        Ok(Self {
            id: CategoryId::new(),
            name,
            description,
            created_at,
            is_active,
        })
    }

    /// Assembles a category from already-validated field values, drawing
    /// a fresh id and stamping the current time. Invariants hold by
    /// construction of the arguments, so this cannot fail.
    pub fn from_parts(
        name: CategoryName,
        description: CategoryDescription,
        is_active: bool,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name,
            description,
            created_at: Utc::now(),
            is_active,
        }
    }

    /// Unique identifier, immutable for the lifetime of the entity.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Free-form description; possibly empty, never absent.
    pub fn description(&self) -> &CategoryDescription {
        &self.description
    }

    /// Creation timestamp, immutable for the lifetime of the entity.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the category is currently active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Marks the category active. Idempotent; touches nothing else.
    pub fn activate(&mut self) -> Result<(), ValidationError> {
        self.is_active = true;
        self.validate()
    }

    /// Marks the category inactive. Idempotent; touches nothing else.
    pub fn deactivate(&mut self) -> Result<(), ValidationError> {
        self.is_active = false;
        self.validate()
    }

    /// Replaces the name and, when supplied, the description.
    ///
    /// `None` retains the current description (partial-update contract),
    /// unlike construction where `None` is an error. The candidate
    /// values are validated before anything is written, so a failed
    /// update leaves both fields unchanged.
    pub fn update(&mut self, name: &str, description: Option<&str>) -> Result<(), ValidationError> {
        let name = CategoryName::new(name)?;
        let description = match description {
            Some(description) => Some(CategoryDescription::new(description)?),
            None => None,
        };

        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
        Ok(())
    }

    /// Re-checks every field invariant against the current state in the
    /// canonical order. Unreachable as a failure through this API, since
    /// the field types only hold validated values, but mutators run it
    /// so a violation introduced elsewhere surfaces at the next call.
    fn validate(&self) -> Result<(), ValidationError> {
        CategoryName::new(self.name.as_str())?;
        CategoryDescription::new(self.description.as_str())?;
        Ok(())
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN};

    const NAME: &str = "Category Name";
    const DESCRIPTION: &str = "Category Description";

    #[test]
    fn instantiate() {
        let before = Utc::now();
        let category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        let after = Utc::now();

        assert_eq!(category.name(), &NAME);
        assert_eq!(category.description(), &DESCRIPTION);
        assert!(!category.id().is_nil());
        assert!(before < category.created_at());
        assert!(category.created_at() < after);
        assert!(category.is_active());
    }

    #[test]
    fn instantiate_with_is_active() {
        for is_active in [true, false] {
            let category = Category::new_with_active(NAME, Some(DESCRIPTION), is_active).unwrap();
            assert_eq!(category.is_active(), is_active);
            assert_eq!(category.name(), &NAME);
            assert_eq!(category.description(), &DESCRIPTION);
            assert!(!category.id().is_nil());
        }
    }

    #[test]
    fn instantiate_with_injected_timestamp() {
        let stamp = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let category = Category::new_with_active_at(NAME, Some(DESCRIPTION), true, stamp).unwrap();
        assert_eq!(category.created_at(), stamp);
    }

    #[test]
    fn instantiate_error_when_name_is_empty() {
        for name in ["", "   "] {
            assert_eq!(
                Category::new(name, Some(DESCRIPTION)).unwrap_err(),
                ValidationError::Empty("name")
            );
        }
    }

    #[test]
    fn instantiate_error_when_name_is_too_short() {
        for name in ["A", "AB", "A1"] {
            assert_eq!(
                Category::new(name, Some(DESCRIPTION)).unwrap_err(),
                ValidationError::TooShort("name", NAME_MIN_LEN)
            );
        }
    }

    #[test]
    fn instantiate_error_when_name_is_too_long() {
        let name = "a".repeat(256);
        assert_eq!(
            Category::new(&name, Some(DESCRIPTION)).unwrap_err(),
            ValidationError::TooLong("name", NAME_MAX_LEN)
        );
    }

    #[test]
    fn instantiate_error_when_description_is_absent() {
        assert_eq!(
            Category::new(NAME, None).unwrap_err(),
            ValidationError::Missing("description")
        );
    }

    #[test]
    fn instantiate_error_when_description_is_too_long() {
        let description = "a".repeat(10_001);
        assert_eq!(
            Category::new(NAME, Some(&description)).unwrap_err(),
            ValidationError::TooLong("description", DESCRIPTION_MAX_LEN)
        );
    }

    #[test]
    fn instantiate_allows_empty_description() {
        let category = Category::new(NAME, Some("")).unwrap();
        assert_eq!(category.description(), &"");
    }

    #[test]
    fn activate() {
        let mut category = Category::new_with_active(NAME, Some(DESCRIPTION), false).unwrap();
        category.activate().unwrap();
        assert!(category.is_active());
    }

    #[test]
    fn deactivate() {
        let mut category = Category::new_with_active(NAME, Some(DESCRIPTION), true).unwrap();
        category.deactivate().unwrap();
        assert!(!category.is_active());
    }

    #[test]
    fn activate_is_idempotent() {
        let mut category = Category::new_with_active(NAME, Some(DESCRIPTION), false).unwrap();
        let id = category.id();
        let created_at = category.created_at();

        category.activate().unwrap();
        category.activate().unwrap();

        assert!(category.is_active());
        assert_eq!(category.id(), id);
        assert_eq!(category.created_at(), created_at);
        assert_eq!(category.name(), &NAME);
        assert_eq!(category.description(), &DESCRIPTION);
    }

    #[test]
    fn update() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        category.update("New Name", Some("New Description")).unwrap();
        assert_eq!(category.name(), &"New Name");
        assert_eq!(category.description(), &"New Description");
    }

    #[test]
    fn update_only_name() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        category.update("New Name", None).unwrap();
        assert_eq!(category.name(), &"New Name");
        assert_eq!(category.description(), &DESCRIPTION);
    }

    #[test]
    fn update_error_when_name_is_empty() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        for name in ["", "   "] {
            assert_eq!(
                category.update(name, None).unwrap_err(),
                ValidationError::Empty("name")
            );
        }
    }

    #[test]
    fn update_error_when_name_is_too_short() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        for name in ["A", "AB", "A1"] {
            assert_eq!(
                category.update(name, None).unwrap_err(),
                ValidationError::TooShort("name", NAME_MIN_LEN)
            );
        }
    }

    #[test]
    fn update_error_when_name_is_too_long() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        let name = "a".repeat(256);
        assert_eq!(
            category.update(&name, None).unwrap_err(),
            ValidationError::TooLong("name", NAME_MAX_LEN)
        );
    }

    #[test]
    fn update_error_when_description_is_too_long() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        let description = "a".repeat(10_001);
        assert_eq!(
            category.update("Category New Name", Some(&description)).unwrap_err(),
            ValidationError::TooLong("description", DESCRIPTION_MAX_LEN)
        );
    }

    #[test]
    fn failed_update_leaves_entity_unchanged() {
        let mut category = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        let description = "a".repeat(10_001);

        category.update("New Name", Some(&description)).unwrap_err();

        assert_eq!(category.name(), &NAME);
        assert_eq!(category.description(), &DESCRIPTION);
    }

    #[test]
    fn equality_is_identity_based() {
        let a = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        let b = Category::new(NAME, Some(DESCRIPTION)).unwrap();
        assert_ne!(a, b);

        let mut renamed = a.clone();
        renamed.update("New Name", None).unwrap();
        assert_eq!(a, renamed);
    }
}
