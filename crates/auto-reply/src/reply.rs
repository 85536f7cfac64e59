use {
    serde::Serialize,
    spud_channels::{
        ChannelOutbound, InboundMessage,
        gating::{AddressMode, is_addressed},
    },
    spud_config::SpudConfig,
    tracing::{debug, info},
};

use crate::{
    Result,
    category::Category,
    dispatch::{Dispatcher, Gates},
    pools::ResponsePools,
    random::UniformSource,
};

/// A response chosen for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub category: Category,
    pub text: String,
}

/// Dispatcher plus pools: everything needed to answer a message.
///
/// Immutable once built; share it by reference (or `Arc`) across handlers.
#[derive(Debug, Clone)]
pub struct AutoReply {
    bot_name: String,
    address_mode: AddressMode,
    dispatcher: Dispatcher,
    pools: ResponsePools,
}

impl AutoReply {
    pub fn new(
        bot_name: impl Into<String>,
        address_mode: AddressMode,
        dispatcher: Dispatcher,
        pools: ResponsePools,
    ) -> Self {
        Self {
            bot_name: bot_name.into(),
            address_mode,
            dispatcher,
            pools,
        }
    }

    /// Compile the matchers and eagerly load all five pools.
    pub fn from_config(config: &SpudConfig) -> Result<Self> {
        let dispatcher = Dispatcher::new(Gates::from(&config.probabilities))?;
        let pools = ResponsePools::load(&config.pools)?;
        Ok(Self::new(
            config.identity.name.clone(),
            config.addressing.mode,
            dispatcher,
            pools,
        ))
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn pools(&self) -> &ResponsePools {
        &self.pools
    }

    /// Classify `text` and draw a line from the chosen pool.
    ///
    /// `None` when dispatch stays silent or the chosen pool is empty.
    pub fn reply(
        &self,
        text: &str,
        is_addressed: bool,
        rng: &mut impl UniformSource,
    ) -> Option<Reply> {
        let category = self.dispatcher.dispatch(text, is_addressed, rng)?;
        let Some(line) = self.pools.draw(category, rng) else {
            info!(%category, "matched but pool is empty, staying quiet");
            return None;
        };
        info!(%category, response = %line, "responding");
        Some(Reply {
            category,
            text: line.to_string(),
        })
    }

    /// Transport glue: gate, reply, and send back to the same channel.
    ///
    /// Messages authored by the bot itself are ignored.
    pub async fn handle_inbound(
        &self,
        msg: &InboundMessage,
        outbound: &dyn ChannelOutbound,
        rng: &mut (impl UniformSource + Send),
    ) -> Result<Option<Reply>> {
        if msg.from_self {
            return Ok(None);
        }
        let addressed = is_addressed(msg, &self.bot_name, self.address_mode);
        debug!(
            channel = %msg.channel_id,
            author = %msg.author,
            addressed,
            "incoming message: {:?}",
            msg.text,
        );

        let Some(reply) = self.reply(&msg.text, addressed, rng) else {
            return Ok(None);
        };
        outbound.send_text(&msg.channel_id, &reply.text).await?;
        Ok(Some(reply))
    }
}
