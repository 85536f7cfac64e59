use async_trait::async_trait;

use crate::Result;

/// A message as delivered by a transport, reduced to what reply gating needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage {
    /// Channel (or DM) the message arrived on; replies go back here.
    pub channel_id: String,
    pub author: String,
    pub text: String,
    /// The transport saw an explicit mention of the bot.
    pub mentions_bot: bool,
    /// Sent in a one-to-one conversation with the bot.
    pub is_direct: bool,
    /// Authored by the bot itself.
    pub from_self: bool,
}

impl InboundMessage {
    pub fn new(
        channel_id: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            author: author.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn mentioning_bot(mut self) -> Self {
        self.mentions_bot = true;
        self
    }

    #[must_use]
    pub fn direct(mut self) -> Self {
        self.is_direct = true;
        self
    }
}

/// Send messages to a channel.
#[async_trait]
pub trait ChannelOutbound: Send + Sync {
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<()>;
}
