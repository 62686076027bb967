use anyhow::Result;
use futures_util::StreamExt;
use teloxide::{
    net::Download,
    prelude::*,
    types::{ChatId, FileId, MessageId},
};

/// Fetch a Telegram file by its id and buffer the raw bytes in memory.
pub async fn download_telegram_file(bot: &Bot, file_id: FileId) -> Result<Vec<u8>> {
    let file = bot.get_file(file_id).await?;
    tracing::debug!(path = %file.path, "Downloading Telegram file");

    let mut bytes = Vec::new();
    let mut stream = bot.download_file_stream(&file.path);
    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(&chunk?);
    }

    tracing::debug!(path = %file.path, size = bytes.len(), "Finished download");
    Ok(bytes)
}

/// Attempt to delete a message and log a warning on failure.
pub async fn try_delete_message(bot: &Bot, chat_id: ChatId, message_id: MessageId) {
    if let Err(err) = bot.delete_message(chat_id, message_id).await {
        tracing::warn!(
            error = %err,
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Failed to delete message",
        );
    }
}
