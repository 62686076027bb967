use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, FileId},
};

use crate::ai::config::AiConfig;
use crate::ai::vision::describe_jewelry;
use crate::currency::{convert_from_inr, Currency};
use crate::db::Database;
use crate::estimator::appraise_description;
use crate::imaging::to_jpeg_bytes;
use crate::messages;
use crate::text_utils::{clip_message, TELEGRAM_MESSAGE_LIMIT};
use crate::utils::{download_telegram_file, try_delete_message};

/// Appraise the largest available size of a photo message.
pub async fn appraise_photo(
    bot: Bot,
    msg: Message,
    db: Database,
    ai_config: Option<AiConfig>,
) -> Result<()> {
    let Some(file_id) = msg
        .photo()
        .and_then(|sizes| sizes.iter().max_by_key(|p| p.file.size))
        .map(|p| p.file.id.clone())
    else {
        tracing::debug!("photo had no usable sizes");
        return Ok(());
    };

    appraise_file(bot, &msg, &db, ai_config, file_id).await
}

/// Appraise an image sent as a document (uncompressed upload).
pub async fn appraise_document(
    bot: Bot,
    msg: Message,
    db: Database,
    ai_config: Option<AiConfig>,
) -> Result<()> {
    let Some(file_id) = msg.document().map(|doc| doc.file.id.clone()) else {
        return Ok(());
    };

    appraise_file(bot, &msg, &db, ai_config, file_id).await
}

/// True when the message carries a document with an image mime type.
pub fn is_image_document(msg: &Message) -> bool {
    msg.document()
        .and_then(|doc| doc.mime_type.as_ref())
        .is_some_and(|mime| mime.type_() == "image")
}

async fn appraise_file(
    bot: Bot,
    msg: &Message,
    db: &Database,
    ai_config: Option<AiConfig>,
    file_id: FileId,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let Some(config) = ai_config else {
        bot.send_message(chat_id, messages::ANALYSIS_DISABLED).await?;
        return Ok(());
    };

    let status = bot.send_message(chat_id, messages::ANALYZING).await?;
    let outcome = run_appraisal(&bot, chat_id, db, &config, file_id).await;
    try_delete_message(&bot, chat_id, status.id).await;

    let reply = match outcome {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(chat_id = chat_id.0, error = %err, "jewelry appraisal failed");
            messages::analysis_error(&err)
        }
    };
    bot.send_message(chat_id, clip_message(&reply, TELEGRAM_MESSAGE_LIMIT))
        .await?;
    Ok(())
}

async fn run_appraisal(
    bot: &Bot,
    chat_id: ChatId,
    db: &Database,
    config: &AiConfig,
    file_id: FileId,
) -> Result<String> {
    let bytes = download_telegram_file(bot, file_id).await?;
    let jpeg = to_jpeg_bytes(&bytes)?;

    tracing::debug!(model = %config.vision_model, "describing jewelry with OpenAI vision");
    let description = describe_jewelry(
        &config.api_key,
        &config.vision_model,
        &jpeg,
        config.openai_chat_url.as_deref(),
    )
    .await?;
    if description.is_empty() {
        return Ok(messages::ANALYSIS_EMPTY.to_string());
    }

    let appraisal = appraise_description(&description);
    tracing::debug!(
        chat_id = chat_id.0,
        diamond_carat = ?appraisal.diamond_carat,
        gold_grams = appraisal.gold_grams,
        karat = %appraisal.karat,
        total_inr = appraisal.total_inr,
        "estimated jewelry price"
    );

    let code = db.get_currency(chat_id).await?;
    let currency = Currency::from_code(&code).unwrap_or(Currency::Inr);
    let amount = convert_from_inr(appraisal.total_inr as f64, currency.code());

    Ok(format!(
        "{description}\n\n{}",
        messages::price_caption(currency, amount)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::util::init_test_db;

    #[tokio::test]
    async fn photo_with_no_sizes_returns_ok() {
        let db = init_test_db().await;
        let bot = Bot::new("test");
        let json = r#"{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},"photo":[]}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        let config = Some(AiConfig {
            api_key: "k".into(),
            vision_model: "v".into(),
            openai_chat_url: None,
        });

        let res = appraise_photo(bot, msg, db, config).await;
        assert!(res.is_ok());
    }

    #[test]
    fn image_document_is_detected() {
        let json = r#"{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},
            "document":{"file_id":"f","file_unique_id":"u","file_name":"ring.png","mime_type":"image/png","file_size":10}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(is_image_document(&msg));
    }

    #[test]
    fn non_image_document_is_ignored() {
        let json = r#"{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},
            "document":{"file_id":"f","file_unique_id":"u","file_name":"doc.pdf","mime_type":"application/pdf","file_size":10}}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(!is_image_document(&msg));
    }
}
