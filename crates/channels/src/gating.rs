pub use spud_config::AddressMode;

use crate::plugin::InboundMessage;

/// Decide whether `msg` was directed at the bot.
///
/// An explicit mention or a direct message always counts. In
/// [`AddressMode::Name`] the bot name appearing anywhere in the text
/// (case-insensitive) also counts, which fires on passing references too.
pub fn is_addressed(msg: &InboundMessage, bot_name: &str, mode: AddressMode) -> bool {
    if msg.mentions_bot || msg.is_direct {
        return true;
    }
    match mode {
        AddressMode::Mention => false,
        AddressMode::Name => mentions_name(&msg.text, bot_name),
    }
}

/// Case-insensitive substring check for the bot name.
pub fn mentions_name(text: &str, bot_name: &str) -> bool {
    let name = bot_name.trim().to_lowercase();
    !name.is_empty() && text.to_lowercase().contains(&name)
}
