//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types;
//! the conversions live here instead so that `data`-only consumers still
//! get them.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::categories::AddCategoryFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<AddCategoryFormError> for ServiceError {
        fn from(val: AddCategoryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
