//! The serenity event handler: trigger filter, ack, scrape, reply.

use anyhow::Result;
use scout_browser::SessionConfig;
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use tracing::{info, warn};

use crate::command::{ack_message, parse_item_command};

/// Outbound side of one conversation; lets the exchange logic run without a
/// gateway connection.
#[async_trait]
trait ReplySink {
    async fn send(&self, text: String) -> Result<()>;
}

struct ChannelSink<'a> {
    http: &'a Http,
    channel_id: ChannelId,
}

#[async_trait]
impl ReplySink for ChannelSink<'_> {
    async fn send(&self, text: String) -> Result<()> {
        self.channel_id.say(self.http, text).await?;
        Ok(())
    }
}

/// Handle one inbound message body: filter, ack, scrape, reply.
///
/// The two outbound messages are strictly ordered: the acknowledgment goes
/// out before the scrape starts (the lookup can take the full wait window),
/// and the result is only sent once the lookup resolves. A failed send is
/// logged, never propagated.
async fn handle_plain_text(browser: &SessionConfig, text: &str, sink: &(impl ReplySink + Sync)) {
    let Some(query) = parse_item_command(text) else {
        return;
    };

    info!(target: "bot.message", %query, "item lookup requested");

    if let Err(err) = sink.send(ack_message(query)).await {
        warn!(target: "bot.message", error = %err, "failed to send acknowledgment");
    }

    let reply = scout_market::lookup(browser, query).await;

    if let Err(err) = sink.send(reply).await {
        warn!(target: "bot.message", error = %err, "failed to send result reply");
    }
}

/// Stateless message handler; every inbound message runs on its own
/// dispatch task with nothing shared between requests.
pub struct Handler {
    browser: SessionConfig,
}

impl Handler {
    pub fn new(browser: SessionConfig) -> Self {
        Self { browser }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(target: "bot.gateway", user = %ready.user.name, "bot connected");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Plain user text only: no bot authors (ourselves included), no
        // slash commands.
        if msg.author.bot || msg.content.trim_start().starts_with('/') {
            return;
        }

        let sink = ChannelSink {
            http: &ctx.http,
            channel_id: msg.channel_id,
        };
        handle_plain_text(&self.browser, &msg.content, &sink).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        fn into_sent(self) -> Vec<String> {
            self.sent.into_inner().unwrap()
        }
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send(&self, text: String) -> Result<()> {
            self.sent.lock().unwrap().push(text);
            Ok(())
        }
    }

    /// Nothing listens here, so the scrape resolves quickly with the fixed
    /// apology instead of needing a live driver.
    fn unreachable_browser() -> SessionConfig {
        SessionConfig {
            webdriver_url: "http://127.0.0.1:1".to_string(),
            ..SessionConfig::default()
        }
    }

    #[tokio::test]
    async fn trigger_message_sends_ack_then_result() {
        let sink = RecordingSink::new();
        handle_plain_text(&unreachable_browser(), "item AK-47 | Redline", &sink).await;

        let sent = sink.into_sent();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].contains("AK-47 | Redline"));
        assert_eq!(sent[1], scout_market::UNEXPECTED_ERROR_REPLY);
    }

    #[tokio::test]
    async fn non_trigger_text_sends_nothing() {
        let sink = RecordingSink::new();
        handle_plain_text(&unreachable_browser(), "hello there", &sink).await;
        assert!(sink.into_sent().is_empty());
    }

    #[tokio::test]
    async fn empty_query_sends_nothing() {
        let sink = RecordingSink::new();
        handle_plain_text(&unreachable_browser(), "item    ", &sink).await;
        assert!(sink.into_sent().is_empty());
    }
}
