use anyhow::Result;
use teloxide::prelude::*;

pub mod ai;
pub mod commands;
pub mod config;
pub mod currency;
pub mod db;
pub mod estimator;
pub mod handlers;
pub mod imaging;
pub mod messages;
pub mod system_info;
pub mod tests;
pub mod text_utils;
pub mod utils;

pub use commands::Command;
pub use config::Config;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting jewelry appraisal bot...");

    let bot = Bot::from_env();

    if config.ai.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; photo analysis is disabled");
    }

    let db_url = db::writable_sqlite_url(&config.db_url);
    tracing::info!("Connecting to database at: {}", &db_url);
    let db = db::connect_db(&db_url, 5).await?;
    db.init_schema().await?;
    tracing::info!("Database connection successful.");

    // --- Handler Setup ---
    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::currency_callback))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter(|msg: Message| msg.photo().is_some())
                        .endpoint(handlers::appraise_photo),
                )
                .branch(
                    dptree::entry()
                        .filter(|msg: Message| handlers::is_image_document(&msg))
                        .endpoint(handlers::appraise_document),
                )
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot, msg: Message, cmd: Command| async move {
                        cmd.dispatch(bot, msg).await
                    },
                ))
                .branch(dptree::endpoint(handlers::photo_hint)),
        );

    // --- Dispatcher ---
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![db, config.ai])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
