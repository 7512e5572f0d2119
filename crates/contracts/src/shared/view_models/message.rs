use serde::Serialize;
use serde_json::Value;

use super::avatar::{avatar_color, initials};
use super::customer::customer_display_name;
use super::defaults::{RawRecord, UNKNOWN_NAME};
use crate::shared::envelope::{extract_list, extract_single, MESSAGES_KEY};
use crate::shared::format::format_date;

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub sender_name: String,
    pub sender_email: String,
    pub read: bool,
    pub created_at: String,
}

impl Message {
    pub fn from_raw(value: &Value) -> Self {
        let record = RawRecord::new(value);

        let (sender_name, sender_email) = match record.nested(&["sender", "from", "author"]) {
            Some(sender) => (customer_display_name(&sender), sender.text(&["email"])),
            None => (
                record
                    .opt_text(&["senderName", "sender_name", "from", "sender"])
                    .or_else(|| record.opt_text(&["senderEmail", "sender_email"]))
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                record.text(&["senderEmail", "sender_email"]),
            ),
        };

        Self {
            id: record.id(),
            subject: record.text(&["subject", "title"]),
            body: record.text(&["body", "content", "text", "message"]),
            sender_name,
            sender_email,
            read: record.flag(&["read", "isRead", "is_read", "seen"]),
            created_at: record.text(&["createdAt", "created_at", "sentAt", "sent_at", "date"]),
        }
    }
}

pub fn messages_from_response(response: &Value) -> Vec<Message> {
    extract_list(response, MESSAGES_KEY)
        .iter()
        .map(Message::from_raw)
        .collect()
}

/// Message detail endpoint: `{message}`, `{data: {message}}`, `{data}` or
/// the bare object.
pub fn message_from_response(response: &Value) -> Message {
    let fields = extract_single(response, &["message", "item"]);
    Message::from_raw(&Value::Object(fields))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: Message,
    pub sender_initials: String,
    pub avatar_color: &'static str,
    pub preview: String,
    pub date_display: String,
}

impl MessageView {
    pub fn new(message: Message) -> Self {
        Self {
            sender_initials: initials(&message.sender_name),
            avatar_color: avatar_color(&message.sender_name),
            preview: preview(&message.body),
            date_display: format_date(&message.created_at),
            message,
        }
    }
}

fn preview(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}
