use anyhow::Result;
use teloxide::prelude::*;

use crate::messages::{HELP_TEXT, SEND_PHOTO_HINT};

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

/// Fallback for plain text messages: point the user at the photo flow.
pub async fn photo_hint(bot: Bot, msg: Message) -> Result<()> {
    if msg.text().is_some() {
        bot.send_message(msg.chat.id, SEND_PHOTO_HINT).await?;
    }
    Ok(())
}
