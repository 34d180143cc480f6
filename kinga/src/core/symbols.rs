//! Fixed symbols of the greeting.

/// The four characters that get shuffled, in winning order.
pub const SYMBOLS: [char; 4] = ['謹', '賀', '新', '年'];

/// The concatenation that triggers the celebratory card.
pub const TARGET: &str = "謹賀新年";

/// Shown before the first shuffle has happened.
pub const PLACEHOLDER: &str = "？？？？";

/// Sub-line printed under a winning greeting.
pub const CELEBRATION_MESSAGE: &str = "今年もよろしくお願いします。";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_symbols_in_order() {
        let joined: String = SYMBOLS.iter().collect();
        assert_eq!(joined, TARGET);
    }

    #[test]
    fn symbols_are_distinct() {
        for (i, a) in SYMBOLS.iter().enumerate() {
            for b in &SYMBOLS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn placeholder_is_not_a_permutation() {
        assert_eq!(PLACEHOLDER.chars().count(), SYMBOLS.len());
        assert!(PLACEHOLDER.chars().all(|c| !SYMBOLS.contains(&c)));
    }
}
