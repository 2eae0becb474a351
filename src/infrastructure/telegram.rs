//! # Telegram Service Adapter
//!
//! Implements the `Messenger` trait for Telegram using `teloxide`, and converts raw updates
//! into typed `BotEvent`s. This module is the only place that knows about Telegram types;
//! everything past `EventRouter::dispatch` works on the domain model.

use crate::application::router::EventRouter;
use crate::domain::events::{BotEvent, CallbackAction, Command, Sender};
use crate::domain::traits::Messenger;
use crate::domain::types::InlineResult;
use crate::strings::logs;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::{
        InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult, InlineQueryResultArticle,
        InputMessageContent, InputMessageContentText, MessageId, ReplyParameters, Update, User,
    },
};

/// Telegram accepts at most this many results per inline answer.
pub const MAX_INLINE_RESULTS: usize = 50;

#[derive(Clone)]
pub struct TelegramService {
    bot: Bot,
}

impl TelegramService {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramService {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i32>,
    ) -> Result<(), String> {
        tracing::info!("Bot sending message to {}: {}", chat_id, text);
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(message_id) = reply_to {
            request = request.reply_parameters(ReplyParameters::new(MessageId(message_id)));
        }
        request.await.map(|_| ()).map_err(|e| e.to_string())
    }

    async fn answer_inline_query(
        &self,
        query_id: &str,
        results: Vec<InlineResult>,
    ) -> Result<(), String> {
        if results.len() > MAX_INLINE_RESULTS {
            tracing::warn!(
                "{}",
                logs::inline_results_capped(results.len(), MAX_INLINE_RESULTS)
            );
        }
        let results: Vec<InlineQueryResult> = results
            .into_iter()
            .take(MAX_INLINE_RESULTS)
            .map(to_telegram_result)
            .collect();

        self.bot
            .answer_inline_query(query_id.to_string(), results)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn send_private(&self, user_id: u64, text: &str) -> Result<(), String> {
        tracing::info!("Bot sending private message to user {}", user_id);
        // A private chat shares its id with the user.
        let chat_id = i64::try_from(user_id).map_err(|e| e.to_string())?;
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), String> {
        self.bot
            .answer_callback_query(callback_id.to_string())
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Converts a domain inline result into an article result with an optional button row.
pub fn to_telegram_result(result: InlineResult) -> InlineQueryResult {
    let content = InputMessageContent::Text(InputMessageContentText::new(result.message_text));
    let mut article = InlineQueryResultArticle::new(result.id, result.title, content)
        .description(result.description);

    if let Some(button) = result.button {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            button.label,
            button.action.encode(),
        )]]);
        article = article.reply_markup(keyboard);
    }

    InlineQueryResult::Article(article)
}

fn sender_from(user: &User) -> Sender {
    Sender {
        id: user.id.0,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
    }
}

/// Parses a message into a command event; `None` for anything that is not one of our commands.
pub fn command_event(msg: &Message, bot_username: Option<&str>) -> Option<BotEvent> {
    let command = Command::parse(msg.text()?, bot_username)?;
    Some(BotEvent::Command {
        command,
        chat_id: msg.chat.id.0,
        message_id: msg.id.0,
        sender: msg.from.as_ref().map(sender_from),
    })
}

pub fn inline_event(query: &InlineQuery) -> BotEvent {
    BotEvent::InlineQuery {
        query_id: query.id.clone(),
        text: query.query.clone(),
    }
}

pub fn callback_event(query: &CallbackQuery) -> BotEvent {
    BotEvent::Callback {
        callback_id: query.id.clone(),
        user_id: query.from.id.0,
        action: query.data.as_deref().and_then(CallbackAction::decode),
    }
}

/// Runs the long-polling dispatcher until Ctrl-C.
pub async fn run(bot: Bot, router: Arc<EventRouter>) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_inline_query().endpoint(inline_query_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update: {:?}", upd);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(logs::HANDLER_ERROR))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::warn!("{}", logs::DISPATCHER_STOPPED);
}

async fn message_handler(msg: Message, router: Arc<EventRouter>) -> ResponseResult<()> {
    let username = router.config().services.telegram.username.as_deref();
    match command_event(&msg, username) {
        Some(event) => router.dispatch(event).await,
        None => tracing::debug!("{}", logs::unhandled_message(msg.chat.id.0)),
    }
    Ok(())
}

async fn inline_query_handler(query: InlineQuery, router: Arc<EventRouter>) -> ResponseResult<()> {
    router.dispatch(inline_event(&query)).await;
    Ok(())
}

async fn callback_handler(query: CallbackQuery, router: Arc<EventRouter>) -> ResponseResult<()> {
    router.dispatch(callback_event(&query)).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::InlineButton;
    use teloxide::types::InlineKeyboardButtonKind;

    fn result(button: Option<InlineButton>) -> InlineResult {
        InlineResult {
            id: "id-1".to_string(),
            title: "FooBar".to_string(),
            description: "Rating: 4.2, Category: TOOLS, Number of Reviews: 10".to_string(),
            message_text: "Title: FooBar\n".to_string(),
            button,
        }
    }

    #[test]
    fn test_result_with_button() {
        let button = InlineButton {
            label: "Show 5Reviews".to_string(),
            action: CallbackAction::ShowReviews("FooBar".to_string()),
        };
        let InlineQueryResult::Article(article) = to_telegram_result(result(Some(button))) else {
            panic!("expected article");
        };
        assert_eq!(article.id, "id-1");
        assert_eq!(article.title, "FooBar");
        assert_eq!(
            article.description.as_deref(),
            Some("Rating: 4.2, Category: TOOLS, Number of Reviews: 10")
        );
        match &article.input_message_content {
            InputMessageContent::Text(text) => assert_eq!(text.message_text, "Title: FooBar\n"),
            other => panic!("unexpected content {other:?}"),
        }

        let keyboard = article.reply_markup.expect("keyboard");
        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, "Show 5Reviews");
        assert_eq!(
            button.kind,
            InlineKeyboardButtonKind::CallbackData("show_reviews:FooBar".to_string())
        );
    }

    #[test]
    fn test_result_without_button() {
        let InlineQueryResult::Article(article) = to_telegram_result(result(None)) else {
            panic!("expected article");
        };
        assert!(article.reply_markup.is_none());
    }
}
