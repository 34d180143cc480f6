//! Test-only helpers for driving greeting cards deterministically.

use std::collections::VecDeque;

use crate::core::permutation::{Permutation, PermutationSource};

/// Build a permutation from its displayed text (e.g. `"年新賀謹"`).
///
/// Panics if `text` is not an ordering of the greeting symbols.
pub fn perm(text: &str) -> Permutation {
    let chars: Vec<char> = text.chars().collect();
    let order: [char; 4] = chars
        .try_into()
        .unwrap_or_else(|_| panic!("{text:?} is not four characters"));
    Permutation::new(order).unwrap_or_else(|| panic!("{text:?} is not a permutation"))
}

/// Source that replays a fixed list of permutations, then repeats the last one.
///
/// Falls back to the winning order when constructed empty.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    queue: VecDeque<Permutation>,
    last: Permutation,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Permutation>) -> Self {
        Self {
            queue: script.into(),
            last: Permutation::identity(),
            draws: 0,
        }
    }

    /// Number of permutations handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl PermutationSource for ScriptedSource {
    fn next_permutation(&mut self) -> Permutation {
        self.draws += 1;
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}
