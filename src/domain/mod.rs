pub mod category;
pub mod product;
pub mod telegram;
pub mod types;
