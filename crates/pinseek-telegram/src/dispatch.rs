//! Update dispatch — the long-poll loop and the per-update handlers.
//!
//! Each update is an isolated unit of work: a handler error is logged with
//! the update id, the requester gets a generic failure notice, and the loop
//! moves on. Only startup problems (no token, unreadable dataset) are
//! allowed to take the process down, and those never reach this module.

use crate::api::{CallbackQuery, EditMessageText, Message, SendMessage, Update};
use crate::client::Bot;
use crate::replies::{self, plan_search_replies};
use anyhow::Context;
use pinseek_core::document::render_pdf;
use pinseek_core::error::QueryError;
use pinseek_core::export::ExportArtifact;
use pinseek_core::{Dataset, Query, Session, SessionStore};
use std::sync::Arc;
use std::time::Duration;

/// Pause before re-polling after a transport failure.
const POLL_BACKOFF: Duration = Duration::from_secs(3);

/// Owns the client, the shared dataset, and per-user sessions; drives the
/// whole conversation surface.
pub struct Dispatcher {
    bot: Bot,
    dataset: Arc<Dataset>,
    sessions: SessionStore,
    chat_results: usize,
    poll_timeout_secs: u64,
    poll_backoff: Duration,
}

impl Dispatcher {
    pub fn new(
        bot: Bot,
        dataset: Arc<Dataset>,
        chat_results: usize,
        poll_timeout_secs: u64,
    ) -> Self {
        Self {
            bot,
            dataset,
            sessions: SessionStore::new(),
            chat_results,
            poll_timeout_secs,
            poll_backoff: POLL_BACKOFF,
        }
    }

    /// Replace the pause taken after a failed poll. Defaults to
    /// `POLL_BACKOFF`; tests shorten it.
    pub fn with_poll_backoff(mut self, backoff: Duration) -> Self {
        self.poll_backoff = backoff;
        self
    }

    /// Long-poll `getUpdates` forever, handling each update in arrival
    /// order. Poll failures back off briefly and retry; they never
    /// terminate the loop.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut offset: Option<i64> = None;
        tracing::info!(
            records = self.dataset.len(),
            chat_results = self.chat_results,
            "dispatcher started"
        );

        loop {
            let updates = match self.bot.get_updates(offset, self.poll_timeout_secs).await {
                Ok(updates) => updates,
                Err(error) => {
                    tracing::warn!(%error, "getUpdates failed, backing off");
                    tokio::time::sleep(self.poll_backoff).await;
                    continue;
                }
            };

            for update in updates {
                offset = Some(update.update_id + 1);
                if let Err(error) = self.handle_update(&update).await {
                    tracing::error!(
                        update_id = update.update_id,
                        error = format!("{error:#}"),
                        "update handler failed"
                    );
                    self.apologize(&update).await;
                }
            }
        }
    }

    async fn handle_update(&self, update: &Update) -> anyhow::Result<()> {
        if let Some(message) = &update.message {
            if let Some(text) = message.text.as_deref() {
                return self.handle_text(message, text).await;
            }
            // Stickers, photos, joins: nothing to answer.
            return Ok(());
        }
        if let Some(callback) = &update.callback_query {
            return self.handle_callback(callback).await;
        }
        Ok(())
    }

    async fn handle_text(&self, message: &Message, text: &str) -> anyhow::Result<()> {
        let trimmed = text.trim();

        if is_start_command(trimmed) {
            self.bot
                .send_message(&SendMessage::html(message.chat.id, replies::WELCOME))
                .await
                .context("send welcome")?;
            return Ok(());
        }
        if trimmed.starts_with('/') {
            // Unrecognized command; stay quiet like an unmatched handler.
            return Ok(());
        }

        let user_id = message.from.as_ref().map_or(message.chat.id, |user| user.id);
        self.handle_search(message.chat.id, user_id, trimmed).await
    }

    async fn handle_search(&self, chat_id: i64, user_id: i64, text: &str) -> anyhow::Result<()> {
        let query = match Query::parse(text) {
            Ok(query) => query,
            Err(QueryError::Empty) => {
                self.bot
                    .send_message(&SendMessage::plain(chat_id, replies::EMPTY_PROMPT))
                    .await
                    .context("send empty-query prompt")?;
                return Ok(());
            }
        };

        let results = self.dataset.search(&query);
        tracing::debug!(query = %query, hits = results.len(), "search complete");

        if results.is_empty() {
            self.bot
                .send_message(&SendMessage::plain(chat_id, replies::NO_RESULTS))
                .await
                .context("send no-results notice")?;
            return Ok(());
        }

        self.sessions.record(
            user_id,
            query.raw().to_string(),
            results.iter().map(|record| (*record).clone()).collect(),
        );

        for reply in plan_search_replies(chat_id, query.raw(), &results, self.chat_results) {
            self.bot
                .send_message(&reply)
                .await
                .context("send search reply")?;
        }
        Ok(())
    }

    async fn handle_callback(&self, callback: &CallbackQuery) -> anyhow::Result<()> {
        let data = callback.data.as_deref().unwrap_or_default();
        if !data.starts_with(replies::EXPORT_CALLBACK_PREFIX) {
            return Ok(());
        }

        // Stop the client-side spinner before the render work starts.
        self.bot
            .answer_callback_query(&callback.id)
            .await
            .context("answer callback")?;

        let Some(message) = &callback.message else {
            tracing::warn!(callback_id = %callback.id, "export callback without a source message");
            return Ok(());
        };
        let chat_id = message.chat.id;

        // The stored session is authoritative for query and results; the
        // callback payload may have been truncated to fit the wire.
        let Some(session) = self.sessions.recall(callback.from.id) else {
            self.bot
                .edit_message_text(&EditMessageText {
                    chat_id,
                    message_id: message.message_id,
                    text: replies::SESSION_GONE.to_string(),
                })
                .await
                .context("edit stale-session notice")?;
            return Ok(());
        };

        if let Err(error) = self.send_export(chat_id, &session).await {
            tracing::error!(chat_id, error = format!("{error:#}"), "export failed");
            self.bot
                .send_message(&SendMessage::plain(chat_id, replies::EXPORT_FAILED))
                .await
                .context("send export failure notice")?;
        }
        Ok(())
    }

    async fn send_export(&self, chat_id: i64, session: &Session) -> anyhow::Result<()> {
        let bytes = render_pdf(&session.results, &session.query).context("render pdf")?;
        let artifact = ExportArtifact::write(&session.query, &bytes).context("write export file")?;

        self.bot
            .send_document(
                chat_id,
                artifact.path(),
                artifact.file_name(),
                &replies::export_caption(&session.query),
            )
            .await
            .context("upload document")?;

        tracing::info!(
            chat_id,
            results = session.results.len(),
            file = artifact.file_name(),
            "export delivered"
        );
        Ok(())
    }

    async fn apologize(&self, update: &Update) {
        let chat_id = update.message.as_ref().map(|m| m.chat.id).or_else(|| {
            update
                .callback_query
                .as_ref()
                .and_then(|q| q.message.as_ref())
                .map(|m| m.chat.id)
        });
        let Some(chat_id) = chat_id else { return };

        if let Err(error) = self
            .bot
            .send_message(&SendMessage::plain(chat_id, replies::SOMETHING_WRONG))
            .await
        {
            tracing::warn!(%error, chat_id, "could not deliver failure notice");
        }
    }
}

/// `/start`, optionally with arguments or a `@botname` suffix.
fn is_start_command(text: &str) -> bool {
    match text.strip_prefix("/start") {
        Some(rest) => rest.is_empty() || rest.starts_with(' ') || rest.starts_with('@'),
        None => false,
    }
}
