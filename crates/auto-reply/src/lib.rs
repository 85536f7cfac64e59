//! Inbound message processing pipeline: the glue between channels and the
//! canned-response pools.
//!
//! Flow: channel message → addressed? → dispatch to a [`Category`] through the
//! matchers and probability gates → draw a line from that category's pool →
//! deliver via channel outbound.

pub mod category;
pub mod dispatch;
pub mod error;
pub mod matchers;
pub mod pools;
pub mod random;
pub mod reply;

pub use {
    category::Category,
    dispatch::{Dispatcher, Gates},
    error::{Error, Result},
    pools::{ResponsePools, load_pool, random_item},
    random::{RngSource, ScriptedSource, StdRngSource, UniformSource},
    reply::{AutoReply, Reply},
};
