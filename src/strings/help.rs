//! # Help Text
//!
//! Displayed to the user via the `/help` command.

/// Username mentioned in the help text when none is configured.
pub const DEFAULT_BOT_USERNAME: &str = "University_Projectbot";

pub fn main(bot_username: Option<&str>) -> String {
    let bot = bot_username.unwrap_or(DEFAULT_BOT_USERNAME);
    format!(
        concat!(
            "\n",
            "Greetings! Here are the commands you can use with this bot:\n",
            "\n",
            "/start -> Begin interacting with the bot\n",
            "/time -> Receive the current time from the bot\n",
            "/fact -> get some interesting facts\n",
            "/help -> Display this message again\n",
            "And by using @{bot} you can see the information of your favorite application\n",
            "Feel free to utilize any of these commands as needed. ",
            "If you require further assistance, don't hesitate to ask. Farewell for now!\n",
        ),
        bot = bot
    )
}
