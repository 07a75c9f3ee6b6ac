use anyhow::Error;
use std::sync::Arc;
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;

use crate::admin_registry::AdminRegistry;
use crate::config::BotConfig;
use crate::database::DatabasePool;
use crate::pending::{PendingStorage, PendingTtl};

mod admin_registry;
mod broadcast;
mod commands;
mod config;
mod database;
mod errors;
mod handlers;
mod logging;
mod menu;
mod pending;
mod router;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Log levels may come from .env.
    let env_file = config::load_environment();
    logging::init_logging()?;

    log::info!("Starting partner menu bot...");
    let start_time = std::time::Instant::now();

    match env_file {
        Ok(Some(path)) => log::info!("Loaded environment from {}", path.display()),
        Ok(None) => log::info!("No .env file found, using process environment"),
        Err(e) => {
            log::error!("Failed to load environment: {}", e);
            return Err(e);
        }
    }

    let config = BotConfig::from_env()?;
    match config.admin_chat_id {
        Some(chat_id) => log::info!("Admin chat: {}", chat_id),
        None => log::info!("ADMIN_CHAT_ID not set"),
    }

    if let Err(e) = database::init_database(&config.database_path, config.bootstrap_admin_id) {
        log::error!("Failed to initialize the database: {:#}", e);
        return Err(e);
    }

    let db_pool = Arc::new(DatabasePool::new(
        config.database_path.clone(),
        config.db_max_connections,
    ));
    let registry = Arc::new(AdminRegistry::load(db_pool.clone()).await?);
    log::info!(
        "Loaded {} admin(s) from {}",
        registry.len().await,
        db_pool.path().display()
    );
    let pending_storage = PendingStorage::new();
    let pending_ttl = PendingTtl(config.pending_ttl);

    let bot = Bot::new(config.token.clone());

    log::info!("Bot initialization completed in {:.2?}", start_time.elapsed());
    log::info!("Starting to dispatch updates...");

    Dispatcher::builder(bot, router::schema())
        .dependencies(dptree::deps![db_pool, registry, pending_storage, pending_ttl])
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot shutdown complete");
    Ok(())
}
