//! Transport-facing types.
//!
//! A transport (Discord, a console, ...) turns its native events into
//! [`InboundMessage`]s, decides with [`gating::is_addressed`] whether the bot
//! was spoken to, and sends replies through a [`ChannelOutbound`].

pub mod error;
pub mod gating;
pub mod plugin;

pub use {
    error::{Error, Result},
    plugin::{ChannelOutbound, InboundMessage},
};
