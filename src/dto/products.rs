use serde::Serialize;

use crate::domain::product::Product;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductDto {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            category_id: value.category_id.get(),
            name: value.name.into_inner(),
            price: value.price,
            description: value.description,
        }
    }
}
