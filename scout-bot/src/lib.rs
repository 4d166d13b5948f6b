//! Discord message adapter for market lookups.
//!
//! The adapter binds one inbound pattern (plain text starting with
//! `"item "`) to one outbound flow: acknowledge, scrape, reply. Each message
//! is handled independently on its own dispatch task; nothing is shared
//! between requests.

mod command;
mod config;
mod handler;

pub use command::{ack_message, parse_item_command};
pub use config::{AppConfig, ConfigError};
pub use handler::Handler;

use anyhow::Result;
use serenity::client::Client;
use serenity::model::gateway::GatewayIntents;

/// Run the bot until the gateway connection ends.
pub async fn run(config: AppConfig) -> Result<()> {
    let AppConfig {
        discord_token,
        browser,
    } = config;

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&discord_token, intents)
        .event_handler(Handler::new(browser))
        .await?;

    client.start().await?;
    Ok(())
}
