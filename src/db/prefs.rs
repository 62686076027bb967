use super::Database;
use anyhow::Result;
use teloxide::types::ChatId;

use crate::currency::BASE_CURRENCY_CODE;

#[derive(sqlx::FromRow)]
struct ChatPref {
    currency: String,
}

impl Database {
    /// Currency code selected for a chat, or the base currency when the chat
    /// has never picked one.
    pub async fn get_currency(&self, chat_id: ChatId) -> Result<String> {
        tracing::trace!(chat_id = chat_id.0, "Fetching currency preference");
        let pref =
            sqlx::query_as::<_, ChatPref>("SELECT currency FROM chat_prefs WHERE chat_id = ?")
                .bind(chat_id.0)
                .fetch_optional(self.pool())
                .await?;
        Ok(pref
            .map(|p| p.currency)
            .unwrap_or_else(|| BASE_CURRENCY_CODE.to_string()))
    }

    pub async fn set_currency(&self, chat_id: ChatId, code: &str) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, code, "Updating currency preference");
        sqlx::query(
            "INSERT INTO chat_prefs (chat_id, currency) VALUES (?, ?) \
             ON CONFLICT(chat_id) DO UPDATE SET currency = excluded.currency",
        )
        .bind(chat_id.0)
        .bind(code)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
