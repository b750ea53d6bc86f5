use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryLevel, CategoryName};

/// Canonical category record.
///
/// `parent_id` links categories into a forest; `level` is derived from the
/// parent chain (root = 1) and is never supplied by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
    pub level: CategoryLevel,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
    pub level: CategoryLevel,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
