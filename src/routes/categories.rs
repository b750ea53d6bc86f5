use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::dto::categories::CategoryDto;
use crate::forms::categories::{AddCategoryForm, AddCategoryFormPayload};
use crate::repository::DieselRepository;
use crate::routes::ErrorReply;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service, show_categories as show_categories_service,
};

/// Confirmation body for a successful category creation.
#[derive(Debug, Serialize)]
struct AddCategoryReply {
    message: String,
    category: CategoryDto,
}

#[post("/product_categories/add")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorReply::new(e.to_string())),
    };

    match create_category_service(payload, repo.get_ref()) {
        Ok(category) => {
            let category = CategoryDto::from(category);
            HttpResponse::Ok().json(AddCategoryReply {
                message: format!("Category \"{}\" created.", category.name),
                category,
            })
        }
        Err(ServiceError::InvalidParent) => {
            HttpResponse::BadRequest().json(ErrorReply::new(ServiceError::InvalidParent.to_string()))
        }
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(ErrorReply::new(message))
        }
        Err(err) => {
            log::error!("Failed to add category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Query parameters accepted by the category listing.
#[derive(Debug, serde::Deserialize)]
pub struct ListCategoriesQueryParams {
    pub root_id: Option<i32>,
}

#[get("/product_categories")]
pub async fn list_categories(
    params: web::Query<ListCategoriesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_categories_service(params.root_id, repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
