//! # Bot Events
//!
//! Typed model of everything the bot reacts to.
//! Transport adapters parse raw updates into a `BotEvent` once; handlers never look at raw strings.

use std::fmt;

/// Prefix of the payload attached to the "show reviews" button.
pub const SHOW_REVIEWS_PREFIX: &str = "show_reviews";

/// Text commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Time,
    Fact,
}

impl Command {
    /// Parses the leading `/command` (optionally `/command@botname`) of a message.
    /// Returns `None` for plain text, unknown commands, or commands addressed to another bot.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = match name.split_once('@') {
            Some((name, target)) => {
                if let Some(own) = bot_username
                    && !own.eq_ignore_ascii_case(target)
                {
                    return None;
                }
                name
            }
            None => name,
        };
        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "time" => Some(Self::Time),
            "fact" => Some(Self::Fact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Time => "time",
            Self::Fact => "fact",
        }
    }
}

/// Action carried by an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ShowReviews(String),
}

impl CallbackAction {
    /// Encodes the action into a callback payload.
    pub fn encode(&self) -> String {
        match self {
            Self::ShowReviews(app) => format!("{SHOW_REVIEWS_PREFIX}:{app}"),
        }
    }

    /// Decodes a callback payload.
    /// Everything after the first `:` is the argument, so application names may contain `:`.
    pub fn decode(payload: &str) -> Option<Self> {
        let (action, arg) = payload.split_once(':')?;
        match action {
            SHOW_REVIEWS_PREFIX => Some(Self::ShowReviews(arg.to_string())),
            _ => None,
        }
    }
}

/// The user who triggered a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: u64,
    pub username: Option<String>,
    pub first_name: String,
}

impl Sender {
    /// Name used to address the user: username, falling back to first name.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}

/// Inbound event, already validated by the transport boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    Command {
        command: Command,
        chat_id: i64,
        message_id: i32,
        sender: Option<Sender>,
    },
    InlineQuery {
        query_id: String,
        text: String,
    },
    Callback {
        callback_id: String,
        user_id: u64,
        /// `None` when the payload was missing or not understood.
        action: Option<CallbackAction>,
    },
}

impl fmt::Display for BotEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command {
                command, chat_id, ..
            } => write!(f, "/{} in chat {}", command.as_str(), chat_id),
            Self::InlineQuery { query_id, text } => {
                write!(f, "inline query {} {:?}", query_id, text)
            }
            Self::Callback {
                callback_id,
                user_id,
                action,
            } => write!(
                f,
                "callback {} from user {} ({:?})",
                callback_id, user_id, action
            ),
        }
    }
}
