use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::handlers::{choose_currency, help, show_system_info};

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "choose the currency used for price estimates.")]
    Currency,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(self, bot: Bot, msg: Message) -> Result<()> {
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::Currency => choose_currency(bot, msg).await?,
            Command::Info => show_system_info(bot, msg).await?,
        }
        Ok(())
    }
}
