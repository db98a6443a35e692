use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::category::Category;
use crate::domain::types::{CategoryDescription, CategoryId, CategoryName, ValidationError};

const fn default_is_active() -> bool {
    true
}

/// Raw create-category input as deserialized from a request body.
///
/// `description` is `Option` so that an absent or `null` field is
/// distinguishable from an empty string; the domain rejects the former.
#[derive(Deserialize, Validate)]
pub struct CreateCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Create-category input with every field carried as a validated domain
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryFormPayload {
    pub name: CategoryName,
    pub description: CategoryDescription,
    pub is_active: bool,
}

impl CreateCategoryFormPayload {
    /// Builds the entity, assigning its id and creation timestamp.
    pub fn into_category(self) -> Category {
        Category::from_parts(self.name, self.description, self.is_active)
    }
}

#[derive(Debug, Error)]
pub enum CreateCategoryFormError {
    /// Transport-level form validation failed.
    #[error("Create category form validation failed: {0}")]
    Validation(String),
    /// A domain invariant was violated.
    #[error(transparent)]
    Domain(#[from] ValidationError),
}

impl From<ValidationErrors> for CreateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryFormPayload {
    type Error = CreateCategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            description: CategoryDescription::from_optional(value.description)?,
            is_active: value.is_active,
        })
    }
}

/// Raw update-category input as deserialized from a request body.
///
/// An absent `description` means "keep the current value", not "clear
/// it"; clearing requires an explicit empty string.
#[derive(Deserialize, Validate)]
pub struct UpdateCategoryForm {
    pub category_id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
}

/// Update-category input with validated field values. The target entity
/// is looked up by `category_id` by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub category_id: CategoryId,
    pub name: CategoryName,
    pub description: Option<CategoryDescription>,
}

impl UpdateCategoryFormPayload {
    /// Applies the update to an already-resolved entity.
    pub fn apply(self, category: &mut Category) -> Result<(), ValidationError> {
        category.update(self.name.as_str(), self.description.as_deref())
    }
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    /// Transport-level form validation failed.
    #[error("Update category form validation failed: {0}")]
    Validation(String),
    /// A domain invariant was violated.
    #[error(transparent)]
    Domain(#[from] ValidationError),
}

impl From<ValidationErrors> for UpdateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let description = match value.description {
            Some(description) => Some(CategoryDescription::new(description)?),
            None => None,
        };

        Ok(Self {
            category_id: value.category_id.into(),
            name: CategoryName::new(value.name)?,
            description,
        })
    }
}
