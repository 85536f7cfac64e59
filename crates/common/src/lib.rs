//! Error plumbing shared by the spud crates.

pub mod error;

pub use error::FromMessage;
