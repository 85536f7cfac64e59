//! Trigger patterns, one per category except the catch-all.
//!
//! All patterns are case-insensitive and anchored on word boundaries so a
//! trigger never fires inside a longer word ("highway" is not "hi").

use regex::{Regex, RegexBuilder};

use crate::{Result, category::Category};

const OBLIQUE: &str = r"\boblique\b|\bstrateg(?:y|ies)\b";

const GREETING: &str = r"\b(?:hi|hey|hoi|yo|hai|hello|howdy|greetings|sup|good\s+(?:morning|day|afternoon|evening))\b";

const GOODNIGHT: &str = r"\b(?:bye|nite|night|later|vista|goodbye|dreams|see\s+you|bai|good\s*night|ttfn|syl|nini)\b";

const THANKS: &str = r"\b(?:thanks?|thanky|thankies|cheers|ty)\b";

/// Compiled trigger patterns.
///
/// Built once at startup and shared read-only by every dispatch.
#[derive(Debug, Clone)]
pub struct Matchers {
    oblique: Regex,
    greeting: Regex,
    goodnight: Regex,
    thanks: Regex,
}

impl Matchers {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            oblique: build(OBLIQUE)?,
            greeting: build(GREETING)?,
            goodnight: build(GOODNIGHT)?,
            thanks: build(THANKS)?,
        })
    }

    /// Whether `text` triggers `category`. The catch-all always matches.
    pub fn matches(&self, category: Category, text: &str) -> bool {
        match self.pattern(category) {
            Some(re) => re.is_match(text),
            None => true,
        }
    }

    fn pattern(&self, category: Category) -> Option<&Regex> {
        match category {
            Category::Oblique => Some(&self.oblique),
            Category::Greeting => Some(&self.greeting),
            Category::Goodnight => Some(&self.goodnight),
            Category::Thanks => Some(&self.thanks),
            Category::Snark => None,
        }
    }
}

fn build(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}
