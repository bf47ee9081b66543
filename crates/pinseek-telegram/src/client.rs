//! Typed Bot API client over `reqwest`.
//!
//! One [`Bot`] wraps one token against one API host. The host is a plain
//! parameter rather than a constant so tests can point the client at a
//! local fake server. Telegram reports method failures inside the JSON
//! envelope (often alongside a non-2xx status), so the client decodes the
//! envelope unconditionally and surfaces `ok == false` as
//! [`TransportError::Api`].

use crate::api::{
    AnswerCallbackQuery, ApiResponse, EditMessageText, GetUpdates, Message, SendMessage, Update,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Update kinds the dispatcher consumes; everything else is dropped
/// server-side.
const ALLOWED_UPDATES: &[&str] = &["message", "callback_query"];

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("bot api request failed")]
    Http(#[from] reqwest::Error),
    #[error("could not read upload from disk")]
    Io(#[from] std::io::Error),
    #[error("{method} rejected: {description}")]
    Api {
        method: &'static str,
        description: String,
    },
}

/// Thin typed client; all methods map one-to-one onto Bot API calls.
#[derive(Debug, Clone)]
pub struct Bot {
    http: reqwest::Client,
    base: String,
}

impl Bot {
    /// `api_url` is the scheme-and-host part, `https://api.telegram.org`
    /// in production.
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: format!("{}/bot{token}", api_url.trim_end_matches('/')),
        }
    }

    /// Long-poll for updates newer than `offset`.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: u64,
    ) -> Result<Vec<Update>, TransportError> {
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout,
                allowed_updates: ALLOWED_UPDATES,
            },
        )
        .await
    }

    pub async fn send_message(&self, message: &SendMessage) -> Result<Message, TransportError> {
        self.call("sendMessage", message).await
    }

    /// Acknowledge a button press so the client stops its spinner.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
    ) -> Result<bool, TransportError> {
        self.call(
            "answerCallbackQuery",
            &AnswerCallbackQuery {
                callback_query_id: callback_query_id.to_string(),
            },
        )
        .await
    }

    pub async fn edit_message_text(&self, edit: &EditMessageText) -> Result<Message, TransportError> {
        self.call("editMessageText", edit).await
    }

    /// Upload the file at `path` as a document with the given name and
    /// caption.
    pub async fn send_document(
        &self,
        chat_id: i64,
        path: &Path,
        file_name: &str,
        caption: &str,
    ) -> Result<Message, TransportError> {
        let bytes = tokio::fs::read(path).await?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("document", part);

        let response = self
            .http
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await?;
        Self::unwrap("sendDocument", response.json().await?)
    }

    async fn call<P, T>(&self, method: &'static str, payload: &P) -> Result<T, TransportError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.method_url(method))
            .json(payload)
            .send()
            .await?;
        Self::unwrap(method, response.json().await?)
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base)
    }

    fn unwrap<T>(method: &'static str, envelope: ApiResponse<T>) -> Result<T, TransportError> {
        if envelope.ok {
            envelope.result.ok_or(TransportError::Api {
                method,
                description: "ok response with no result".to_string(),
            })
        } else {
            Err(TransportError::Api {
                method,
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            })
        }
    }
}
