use actix_web::web;
use serde::Serialize;

pub mod categories;
pub mod products;
pub mod webhook;

/// Error body returned by admin endpoints, naming the violated constraint
/// so the operator-facing layer can render an actionable message.
#[derive(Debug, Serialize)]
pub struct ErrorReply {
    pub error: String,
}

impl ErrorReply {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Registers every route of the application. Shared between `main` and the
/// integration tests so both run the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(webhook::telegram_webhook).service(
        web::scope("/admin")
            .service(categories::add_category)
            .service(categories::list_categories)
            .service(products::list_products)
            .service(products::get_product),
    );
}
