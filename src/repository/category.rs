use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryError};
use crate::repository::errors::RepositoryResult;

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;

        let items = product_categories::table
            .order(product_categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn list_categories_by_parent(
        &self,
        parent_id: Option<CategoryId>,
    ) -> RepositoryResult<Vec<Category>> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;

        // `eq(None)` compiles to `= NULL` which matches nothing, so the
        // root group needs an explicit IS NULL filter.
        let mut query = product_categories::table.into_boxed::<diesel::sqlite::Sqlite>();
        query = match parent_id {
            Some(parent_id) => query.filter(product_categories::parent_id.eq(parent_id.get())),
            None => query.filter(product_categories::parent_id.is_null()),
        };

        let items = query
            .order(product_categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;

        let category = product_categories::table
            .filter(product_categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(product_categories::table)
            .values(db_category)
            .get_result::<DbCategory>(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    RepositoryError::UniqueViolation(format!(
                        "category '{}' already exists under the same parent",
                        category.name
                    ))
                }
                other => RepositoryError::Database(other),
            })?;

        Ok(created.try_into()?)
    }
}
