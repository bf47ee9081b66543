//! pinseek Telegram transport — Bot API wire types, client, and dispatch.

pub mod api;
pub mod client;
pub mod dispatch;
pub mod replies;

pub use client::{Bot, TransportError};
pub use dispatch::Dispatcher;

use pinseek_core::{Config, Dataset};
use std::sync::Arc;

/// Connect to the Bot API and serve lookups until the process exits.
pub async fn run(config: &Config, dataset: Arc<Dataset>) -> anyhow::Result<()> {
    let bot = Bot::new(&config.telegram.api_url, &config.telegram.token);
    Dispatcher::new(
        bot,
        dataset,
        config.limits.chat_results,
        config.telegram.poll_timeout_secs,
    )
    .run()
    .await
}
