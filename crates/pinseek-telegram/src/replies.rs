//! Reply planning — what a search answer looks like before it is sent.
//!
//! Planning is pure: given the matched records and the chat result limit,
//! [`plan_search_replies`] decides how many blocks go to the chat, which
//! block carries the export button, and whether the overflow notices are
//! needed. The dispatcher only ships the plan, so every branch here is
//! unit-testable without a network.

use crate::api::{InlineKeyboardButton, InlineKeyboardMarkup, SendMessage};
use pinseek_core::format::format_text;
use pinseek_core::PostOffice;

/// Callback payload prefix for the export button.
pub const EXPORT_CALLBACK_PREFIX: &str = "pdf_export:";

/// Telegram rejects callback data longer than 64 bytes.
const CALLBACK_DATA_BUDGET: usize = 64;

pub const WELCOME: &str = "🔍 <b>Indian Pincode Search Bot</b>\n\n\
    You can search by:\n\
    • 6-digit pincode (e.g., 110001)\n\
    • Office name (e.g., 'GPO')\n\
    • District name (e.g., 'New Delhi')\n\
    • State name (e.g., 'Maharashtra')\n\n\
    Just type your query and I'll find matching pincodes!";

pub const EMPTY_PROMPT: &str = "Please enter a pincode or location name to search.";

pub const NO_RESULTS: &str = "❌ No results found. Please try a different query.";

pub const SESSION_GONE: &str =
    "Sorry, I couldn't find those results anymore. Please perform a new search.";

pub const EXPORT_FAILED: &str =
    "❌ Sorry, there was an error generating the PDF. Please try again.";

pub const SOMETHING_WRONG: &str =
    "❌ Sorry, something went wrong. Please try again later or with a different query.";

/// Caption attached to the uploaded PDF.
pub fn export_caption(query: &str) -> String {
    format!("Here are the pincode results for '{query}'")
}

/// Callback payload for the export button, truncated to Telegram's budget
/// on a char boundary. The stored session keeps the full query, so a
/// truncated payload only ever loses display fidelity, never results.
pub fn export_callback_data(query: &str) -> String {
    let mut data = format!("{EXPORT_CALLBACK_PREFIX}{query}");
    if data.len() > CALLBACK_DATA_BUDGET {
        let mut cut = CALLBACK_DATA_BUDGET;
        while !data.is_char_boundary(cut) {
            cut -= 1;
        }
        data.truncate(cut);
    }
    data
}

/// Plan the chat answer for a non-empty result set.
///
/// At most `limit` records are rendered as HTML blocks. The last rendered
/// block always gains the export prompt and the `Export to PDF` button;
/// when more records exist than fit, it also gains a `Showing X of N`
/// notice and a final plain follow-up asks the user to refine the search.
pub fn plan_search_replies(
    chat_id: i64,
    query: &str,
    results: &[&PostOffice],
    limit: usize,
) -> Vec<SendMessage> {
    let shown = results.len().min(limit);
    let mut messages = Vec::with_capacity(shown + 1);

    for (index, record) in results.iter().take(limit).enumerate() {
        let mut text = format_text(record, Some(index));

        if index + 1 == shown {
            if results.len() > limit {
                text.push_str(&format!(
                    "\n\nℹ️ Showing {shown} of {} results.",
                    results.len()
                ));
            }
            text.push_str("\n\n📄 You can export all results to PDF:");
            let button =
                InlineKeyboardButton::callback("Export to PDF", export_callback_data(query));
            messages.push(
                SendMessage::html(chat_id, text)
                    .with_keyboard(InlineKeyboardMarkup::single(button)),
            );
        } else {
            messages.push(SendMessage::html(chat_id, text));
        }
    }

    if results.len() > limit {
        messages.push(SendMessage::html(
            chat_id,
            format!(
                "ℹ️ There are more results ({} total). Please refine your search for better results.",
                results.len()
            ),
        ));
    }

    messages
}
