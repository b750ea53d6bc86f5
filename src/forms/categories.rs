use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Raw form submitted by the admin panel.
///
/// `parent_id` arrives as a string because an empty field means "root".
#[derive(Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub parent_id: String,
}

/// Validated payload with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Add category form parent_id is not a number: {0}")]
    ParentId(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let parent_id = match value.parent_id.trim() {
            "" => None,
            raw => {
                let id: i32 = raw
                    .parse()
                    .map_err(|_| AddCategoryFormError::ParentId(raw.to_string()))?;
                Some(CategoryId::new(id)?)
            }
        };

        Ok(Self {
            name: CategoryName::new(value.name)?,
            parent_id,
        })
    }
}
