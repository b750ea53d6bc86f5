//! Command dispatcher for normalized webhook updates.

use crate::domain::telegram::{BotCommand, BotResponse, NormalizedUpdate};
use crate::repository::{CategoryReader, ProductReader};
use crate::services::categories::list_tree;

const UNRECOGNIZED_REPLY: &str =
    "Unrecognized command. Send /products to browse the catalog or /help for the command list.";
const EMPTY_CATALOG_REPLY: &str = "There are no product categories yet. Check back later!";
const INTERNAL_REPLY: &str = "Something went wrong on our side. Please try again later.";
const HELP_REPLY: &str = "Available commands:\n\
    /products - browse the product catalog\n\
    /help - show this message";

/// Maps a normalized update to a reply. Total: unknown commands get the
/// fallback reply and handler-internal failures degrade to an apology text
/// instead of an error, so the webhook can always acknowledge the update.
pub fn dispatch<R>(update: &NormalizedUpdate, repo: &R) -> BotResponse
where
    R: CategoryReader + ProductReader,
{
    let text = match &update.command {
        BotCommand::Start => HELP_REPLY.to_string(),
        BotCommand::Help => HELP_REPLY.to_string(),
        BotCommand::Products => products_reply(repo),
        BotCommand::Unknown(_) => UNRECOGNIZED_REPLY.to_string(),
    };
    BotResponse::send_message(update.chat_id, text)
}

/// Renders the category tree indented by level, with per-category product
/// counts where products exist.
fn products_reply<R>(repo: &R) -> String
where
    R: CategoryReader + ProductReader,
{
    let tree = match list_tree(repo, None) {
        Ok(tree) => tree,
        Err(e) => {
            log::error!("Failed to build category tree for /products: {e}");
            return INTERNAL_REPLY.to_string();
        }
    };

    if tree.is_empty() {
        return EMPTY_CATALOG_REPLY.to_string();
    }

    let counts = match repo.count_products_by_category() {
        Ok(counts) => counts,
        Err(e) => {
            log::error!("Failed to count products for /products: {e}");
            return INTERNAL_REPLY.to_string();
        }
    };

    let mut lines = vec!["Product categories:".to_string()];
    for category in tree {
        let indent = "  ".repeat((category.level.get() - 1) as usize);
        match counts.get(&category.id) {
            Some(count) => lines.push(format!("{indent}{} ({count})", category.name)),
            None => lines.push(format!("{indent}{}", category.name)),
        }
    }
    lines.join("\n")
}
