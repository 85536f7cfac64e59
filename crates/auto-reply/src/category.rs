use std::fmt;

use serde::{Deserialize, Serialize};

/// Response class a message can be routed to.
///
/// Variants are declared in dispatch priority order; [`Category::ALL`] drives
/// the dispatch chain and the pool table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Oblique-strategy card. Responds to unaddressed chatter too.
    Oblique,
    Greeting,
    Goodnight,
    Thanks,
    /// Catch-all, has no pattern.
    Snark,
}

impl Category {
    /// Every category, highest priority first.
    pub const ALL: [Category; 5] = [
        Self::Oblique,
        Self::Greeting,
        Self::Goodnight,
        Self::Thanks,
        Self::Snark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oblique => "oblique",
            Self::Greeting => "greeting",
            Self::Goodnight => "goodnight",
            Self::Thanks => "thanks",
            Self::Snark => "snark",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this category may answer messages not addressed to the bot.
    pub fn answers_unaddressed(self) -> bool {
        matches!(self, Self::Oblique)
    }

    /// The unconditional fallback that needs no pattern match.
    pub fn is_catch_all(self) -> bool {
        matches!(self, Self::Snark)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
