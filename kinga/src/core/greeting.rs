//! Greeting card state and variant selection.

use serde::Serialize;

use crate::core::permutation::PermutationSource;
use crate::core::symbols::{PLACEHOLDER, TARGET};

/// Which layout the card is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Any greeting other than the target.
    Neutral,
    /// The greeting reads 謹賀新年.
    Celebratory,
}

/// Pick the variant for a greeting text.
pub fn select_variant(greeting: &str) -> Variant {
    if greeting == TARGET {
        Variant::Celebratory
    } else {
        Variant::Neutral
    }
}

/// What a renderer needs to draw the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub greeting: String,
    pub variant: Variant,
}

/// A single page's greeting.
///
/// Starts at [`PLACEHOLDER`]. [`GreetingCard::initialize`] draws the first
/// permutation exactly once; [`GreetingCard::regenerate`] draws a new one on
/// every call. The variant is derived from the current text on every read, so
/// it can never lag behind the state.
#[derive(Debug)]
pub struct GreetingCard<S> {
    source: S,
    greeting: String,
    initialized: bool,
}

impl<S: PermutationSource> GreetingCard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            greeting: PLACEHOLDER.to_string(),
            initialized: false,
        }
    }

    /// Build a card and run its one-time initialization.
    pub fn mounted(source: S) -> Self {
        let mut card = Self::new(source);
        card.initialize();
        card
    }

    /// First draw. Later calls are no-ops.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        self.greeting = self.source.next_permutation().concat();
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn is_placeholder(&self) -> bool {
        self.greeting == PLACEHOLDER
    }

    pub fn variant(&self) -> Variant {
        select_variant(&self.greeting)
    }

    pub fn view(&self) -> CardView {
        CardView {
            greeting: self.greeting.clone(),
            variant: self.variant(),
        }
    }
}
