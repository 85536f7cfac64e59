//! Priority-ordered decision procedure.
//!
//! Walks [`Category::ALL`] highest priority first. A category is a candidate
//! when its pattern matches (the catch-all always is); every candidate costs
//! exactly one draw, and the first draw below its gate wins. A blocked gate
//! falls through to the next category. Only categories that answer
//! unaddressed chatter are considered when the message was not addressed.

use {spud_config::ProbabilityConfig, tracing::trace};

use crate::{Result, category::Category, matchers::Matchers, random::UniformSource};

/// Per-category chance to respond once matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gates([f64; 5]);

impl Gates {
    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    #[must_use]
    pub fn with(mut self, category: Category, probability: f64) -> Self {
        self.0[category.index()] = probability;
        self
    }
}

impl Default for Gates {
    fn default() -> Self {
        Self::from(&ProbabilityConfig::default())
    }
}

impl From<&ProbabilityConfig> for Gates {
    fn from(p: &ProbabilityConfig) -> Self {
        Self([p.oblique, p.greeting, p.goodnight, p.thanks, p.snark])
    }
}

/// Stateless classifier; safe to share across concurrent callers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    matchers: Matchers,
    gates: Gates,
}

impl Dispatcher {
    pub fn new(gates: Gates) -> Result<Self> {
        Ok(Self {
            matchers: Matchers::compile()?,
            gates,
        })
    }

    pub fn gates(&self) -> &Gates {
        &self.gates
    }

    /// Whether `text` triggers `category`.
    pub fn matches(&self, category: Category, text: &str) -> bool {
        self.matchers.matches(category, text)
    }

    /// Route one message to a category, or `None` for silence.
    pub fn dispatch(
        &self,
        text: &str,
        is_addressed: bool,
        rng: &mut impl UniformSource,
    ) -> Option<Category> {
        for category in Category::ALL {
            if !is_addressed && !category.answers_unaddressed() {
                return None;
            }
            if !self.matchers.matches(category, text) {
                continue;
            }
            let r = rng.next_uniform();
            let gate = self.gates.get(category);
            if r < gate {
                return Some(category);
            }
            trace!(%category, r, gate, "gate blocked, falling through");
        }
        None
    }
}
