use anyhow::Result;
use teloxide::{prelude::*, types::InlineKeyboardMarkup};

use crate::currency::Currency;
use crate::db::Database;
use crate::messages;

use super::keyboard::build_choice_buttons;

const CALLBACK_PREFIX: &str = "currency:";

fn currency_keyboard() -> InlineKeyboardMarkup {
    let buttons = build_choice_buttons(
        &Currency::ALL,
        |currency| currency.label().to_string(),
        |currency| format!("{CALLBACK_PREFIX}{}", currency.code()),
    );
    InlineKeyboardMarkup::new(buttons)
}

/// Send the currency picker for `/currency`.
pub async fn choose_currency(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, messages::CURRENCY_PROMPT)
        .reply_markup(currency_keyboard())
        .await?;
    Ok(())
}

/// Store the picked currency and confirm by editing the picker message.
pub async fn currency_callback(bot: Bot, q: CallbackQuery, db: Database) -> Result<()> {
    let picked = q
        .data
        .as_deref()
        .and_then(|data| data.strip_prefix(CALLBACK_PREFIX))
        .and_then(Currency::from_code);

    if let Some(currency) = picked {
        if let Some(msg) = q.regular_message() {
            db.set_currency(msg.chat.id, currency.code()).await?;
            let _ = bot
                .edit_message_text(msg.chat.id, msg.id, messages::currency_set_text(currency))
                .await;
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
