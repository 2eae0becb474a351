//! # Event Router
//!
//! Routes typed bot events to the appropriate handler (in `interface/commands`).
//! Errors raised by a handler are logged together with the originating event and never propagate.

use anyhow::Result;
use std::sync::Arc;

use crate::application::dataset::Dataset;
use crate::domain::config::AppConfig;
use crate::domain::events::{BotEvent, CallbackAction, Command};
use crate::domain::traits::{FactSource, Messenger};
use crate::interface::commands;
use crate::strings::logs;

pub struct EventRouter {
    config: AppConfig,
    chat: Arc<dyn Messenger>,
    facts: Arc<dyn FactSource>,
    dataset: Arc<Dataset>,
}

impl EventRouter {
    pub fn new(
        config: AppConfig,
        chat: Arc<dyn Messenger>,
        facts: Arc<dyn FactSource>,
        dataset: Arc<Dataset>,
    ) -> Self {
        Self {
            config,
            chat,
            facts,
            dataset,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handles one event. Failures end here: they are logged and swallowed.
    pub async fn dispatch(&self, event: BotEvent) {
        if let Err(e) = self.route(&event).await {
            tracing::error!("{}", logs::event_failed(&event, &format!("{e:#}")));
        }
    }

    pub async fn route(&self, event: &BotEvent) -> Result<()> {
        tracing::debug!("Router dispatching {}", event);
        let chat = self.chat.as_ref();

        match event {
            BotEvent::Command {
                command,
                chat_id,
                message_id,
                sender,
            } => match command {
                Command::Start => {
                    commands::start::handle_start(chat, *chat_id, sender.as_ref()).await?;
                }
                Command::Help => {
                    let username = self.config.services.telegram.username.as_deref();
                    commands::help::handle_help(chat, *chat_id, *message_id, username).await?;
                }
                Command::Time => {
                    commands::time::handle_time(chat, *chat_id, *message_id, chrono::Local::now())
                        .await?;
                }
                Command::Fact => {
                    commands::fact::handle_fact(chat, self.facts.as_ref(), *chat_id).await?;
                }
            },
            BotEvent::InlineQuery { query_id, text } => {
                commands::inline::handle_inline_query(chat, &self.dataset, query_id, text).await?;
            }
            BotEvent::Callback {
                callback_id,
                user_id,
                action,
            } => {
                chat.acknowledge_callback(callback_id)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;

                match action {
                    Some(CallbackAction::ShowReviews(app_name)) => {
                        commands::reviews::handle_show_reviews(
                            chat,
                            &self.dataset,
                            *user_id,
                            app_name,
                            self.config.reviews.limit,
                        )
                        .await?;
                    }
                    None => {
                        tracing::warn!("{}", logs::unknown_callback(callback_id));
                    }
                }
            }
        }

        Ok(())
    }
}
