use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductId};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut q = products::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                q = q.filter(products::category_id.eq(category_id.get()));
            }
            if let Some(search) = &query.search {
                q = q.filter(products::name.like(format!("%{search}%")));
            }
            q
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = (pagination.page.max(1) - 1)
                .saturating_mul(pagination.per_page)
                .min(i64::MAX as usize) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order(products::name.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok((total, items))
    }

    fn count_products_by_category(&self) -> RepositoryResult<HashMap<CategoryId, i64>> {
        use diesel::dsl::count_star;

        use crate::schema::products;

        let mut conn = self.conn()?;

        let rows = products::table
            .group_by(products::category_id)
            .select((products::category_id, count_star()))
            .load::<(i32, i64)>(&mut conn)?;

        let mut counts = HashMap::new();
        for (category_id, count) in rows {
            counts.insert(CategoryId::new(category_id)?, count);
        }
        Ok(counts)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}
