use serde::Deserialize;

use crate::domain::types::{CategoryId, ProductId};
use crate::dto::products::ProductDto;
use crate::repository::{DEFAULT_ITEMS_PER_PAGE, ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Query parameters accepted by the admin products listing.
#[derive(Deserialize, Debug)]
pub struct ProductsQueryParams {
    pub category_id: Option<i32>,
    pub query: Option<String>,
    pub page: Option<usize>,
}

/// Core business logic for the `/admin/products` endpoint.
///
/// Returns a page of products, optionally restricted to a category and
/// filtered by a search string. Repository interactions are handled here so
/// the HTTP route can remain a thin wrapper.
pub fn list_products<R>(params: ProductsQueryParams, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    let mut list_query = ProductListQuery::default();

    if let Some(category_id) = params.category_id {
        let category_id = match CategoryId::new(category_id) {
            Ok(category_id) => category_id,
            Err(_) => return Err(ServiceError::NotFound),
        };
        list_query = list_query.category(category_id);
    }

    if let Some(query) = &params.query {
        if !query.is_empty() {
            list_query = list_query.search(query.as_str());
        }
    }

    let page = params.page.unwrap_or(1);
    list_query = list_query.paginate(page, DEFAULT_ITEMS_PER_PAGE);

    match repo.list_products(list_query) {
        Ok((_total, products)) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the `/admin/products/{product_id}` endpoint.
pub fn get_product<R>(product_id: i32, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let product_id = match ProductId::new(product_id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(ProductDto::from(product)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
