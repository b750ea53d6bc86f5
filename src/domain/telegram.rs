//! Telegram webhook envelope and its normalized form.
//!
//! Telegram pushes many update shapes; the bot only acts on plain text
//! messages. Anything else is rejected explicitly at the ingress boundary
//! instead of being probed field by field downstream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw webhook payload as posted by Telegram.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub chat: TelegramChat,
    #[serde(default)]
    pub from: Option<TelegramUser>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
}

/// Reasons a webhook payload cannot be turned into a [`NormalizedUpdate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedUpdate {
    #[error("update carries no message")]
    MissingMessage,
    #[error("message carries no sender")]
    MissingSender,
    #[error("message carries no text")]
    MissingText,
    #[error("messages from bots are ignored")]
    SenderIsBot,
}

/// Commands the dispatcher understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Products,
    Unknown(String),
}

impl BotCommand {
    /// Parses the first token of a message text.
    ///
    /// Telegram appends `@botname` to commands issued in groups; the suffix
    /// is stripped before matching.
    pub fn parse(text: &str) -> Self {
        let token = text.split_whitespace().next().unwrap_or_default();
        let command = token.split('@').next().unwrap_or(token);
        match command {
            "/start" => Self::Start,
            "/help" => Self::Help,
            "/products" => Self::Products,
            _ => Self::Unknown(token.to_string()),
        }
    }
}

/// Validated, minimal representation of a webhook update.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUpdate {
    pub update_id: i64,
    pub chat_id: i64,
    pub user_id: i64,
    pub command: BotCommand,
}

impl TelegramUpdate {
    /// Resolves the required fields or reports which one is missing.
    pub fn normalize(self) -> Result<NormalizedUpdate, MalformedUpdate> {
        let message = self.message.ok_or(MalformedUpdate::MissingMessage)?;
        let from = message.from.ok_or(MalformedUpdate::MissingSender)?;
        if from.is_bot {
            return Err(MalformedUpdate::SenderIsBot);
        }
        let text = match message.text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(MalformedUpdate::MissingText),
        };
        Ok(NormalizedUpdate {
            update_id: self.update_id,
            chat_id: message.chat.id,
            user_id: from.id,
            command: BotCommand::parse(&text),
        })
    }
}

/// Reply returned in the webhook HTTP response body.
///
/// Telegram allows answering a webhook call with a bot API method instead
/// of issuing a separate outbound request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BotResponse {
    pub method: &'static str,
    pub chat_id: i64,
    pub text: String,
}

impl BotResponse {
    pub fn send_message(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            method: "sendMessage",
            chat_id,
            text: text.into(),
        }
    }
}
