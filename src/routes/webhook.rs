use actix_web::{HttpResponse, Responder, post, web};

use crate::dedup::UpdateDedup;
use crate::domain::telegram::TelegramUpdate;
use crate::repository::DieselRepository;
use crate::routes::ErrorReply;
use crate::services::bot::dispatch;

/// Telegram webhook endpoint.
///
/// Malformed payloads are the only non-200 outcome; once an update parses
/// and normalizes, the platform gets an acknowledgment no matter what the
/// command handler does, otherwise Telegram keeps re-delivering the same
/// update. Replies ride along in the response body using the bot API
/// `method` form, so no outbound request is needed.
#[post("/webhook")]
pub async fn telegram_webhook(
    update: web::Json<TelegramUpdate>,
    repo: web::Data<DieselRepository>,
    dedup: web::Data<UpdateDedup>,
) -> impl Responder {
    let normalized = match update.into_inner().normalize() {
        Ok(normalized) => normalized,
        Err(e) => return HttpResponse::BadRequest().json(ErrorReply::new(e.to_string())),
    };

    if !dedup.insert(normalized.update_id) {
        log::debug!("Dropping replayed update {}", normalized.update_id);
        return HttpResponse::Ok().finish();
    }

    let response = dispatch(&normalized, repo.get_ref());
    HttpResponse::Ok().json(response)
}
