//! Category hierarchy engine.
//!
//! Stateless business logic over the repository traits: derives `level`
//! from the parent chain, guards tree depth and produces the
//! parent-before-child ordering used for display.

use std::collections::HashMap;

use chrono::Utc;

use crate::MAX_CATEGORY_DEPTH;
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryLevel};
use crate::dto::categories::CategoryDto;
use crate::forms::categories::AddCategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Creates a category, deriving its level from the parent.
///
/// Sibling-name uniqueness is enforced by the database constraint, not by a
/// check-then-insert here, so concurrent duplicates cannot both slip
/// through. The violation comes back as [`ServiceError::Form`] with an
/// operator-facing message.
pub fn create_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let level = match payload.parent_id {
        None => CategoryLevel::ROOT,
        Some(parent_id) => {
            let parent = match repo.get_category_by_id(parent_id) {
                Ok(Some(parent)) => parent,
                Ok(None) => return Err(ServiceError::InvalidParent),
                Err(e) => {
                    log::error!("Failed to get parent category: {e}");
                    return Err(ServiceError::Internal);
                }
            };
            if parent.level.get() >= MAX_CATEGORY_DEPTH {
                return Err(ServiceError::Form(format!(
                    "category tree cannot be deeper than {MAX_CATEGORY_DEPTH} levels"
                )));
            }
            parent.level.child()
        }
    };

    let now = Utc::now().naive_utc();
    let category = NewCategory {
        name: payload.name,
        parent_id: payload.parent_id,
        level,
        created_at: now,
        updated_at: now,
    };

    match repo.create_category(&category) {
        Ok(created) => Ok(created),
        Err(RepositoryError::UniqueViolation(message)) => Err(ServiceError::Form(message)),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Returns the forest in display order, or a single subtree when
/// `root_id` is given (the root itself included).
///
/// Children follow their parent immediately, each sibling group sorted by
/// name. Rows whose parent is missing are skipped, and the walk never goes
/// deeper than [`MAX_CATEGORY_DEPTH`], so malformed data degrades instead
/// of looping.
pub fn list_tree<R>(repo: &R, root_id: Option<CategoryId>) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    let mut categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let roots = match root_id {
        None => None,
        Some(root_id) => {
            let position = categories
                .iter()
                .position(|c| c.id == root_id)
                .ok_or(ServiceError::NotFound)?;
            Some(vec![categories.swap_remove(position)])
        }
    };

    // list_categories is name-ordered, so every sibling group stays sorted
    // after grouping by parent.
    let mut children: HashMap<Option<CategoryId>, Vec<Category>> = HashMap::new();
    for category in categories {
        children.entry(category.parent_id).or_default().push(category);
    }

    let mut stack = match roots {
        Some(roots) => roots,
        None => children.remove(&None).unwrap_or_default(),
    };
    let mut ordered = Vec::new();
    stack.reverse();
    while let Some(category) = stack.pop() {
        if category.level.get() < MAX_CATEGORY_DEPTH {
            if let Some(mut descendants) = children.remove(&Some(category.id)) {
                descendants.reverse();
                stack.extend(descendants);
            }
        }
        ordered.push(category);
    }

    Ok(ordered)
}

/// Flat DTO list for the admin surface, in tree order. An optional root
/// restricts the listing to that category's subtree.
pub fn show_categories<R>(root_id: Option<i32>, repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    let root_id = root_id
        .map(|raw| CategoryId::new(raw).map_err(|_| ServiceError::NotFound))
        .transpose()?;
    Ok(list_tree(repo, root_id)?
        .into_iter()
        .map(CategoryDto::from)
        .collect())
}
