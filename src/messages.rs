//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and
//! are easy to update or translate.

use crate::currency::{format_amount, Currency};

pub const HELP_TEXT: &str =
    "Send me a photo of a jewelry item and I will describe it and estimate its price.\n\
     Estimates are visual approximations, per item shown in the image.\n\n\
     <b>Commands:</b>\n\
     /currency - Choose the currency used for price estimates.\n\
     /info - Show system information.";

pub const SEND_PHOTO_HINT: &str =
    "Send me a jewelry photo (JPG or PNG) to get an analysis and a price estimate.";

pub const ANALYZING: &str = "Analyzing jewelry image...";

pub const ANALYSIS_DISABLED: &str = "Image analysis is disabled.";

pub const ANALYSIS_EMPTY: &str =
    "Sorry, I couldn't analyze the image effectively. Please try again with a clearer image.";

pub fn analysis_error(err: &anyhow::Error) -> String {
    format!("Error during analysis: {err}")
}

pub const CURRENCY_PROMPT: &str = "Select the currency used for price estimates:";

pub fn currency_set_text(currency: Currency) -> String {
    format!("Price estimates will now be shown in {}.", currency.label())
}

pub fn price_caption(currency: Currency, amount: f64) -> String {
    format!(
        "Estimated price (per item): {} {}",
        currency.symbol(),
        format_amount(amount)
    )
}
