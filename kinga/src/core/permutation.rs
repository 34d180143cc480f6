//! Random orderings of the greeting symbols.

use rand::Rng;

use crate::core::symbols::SYMBOLS;

/// One ordering of [`SYMBOLS`], each symbol exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([char; 4]);

impl Permutation {
    /// Wrap `order` if it uses every symbol exactly once.
    pub fn new(order: [char; 4]) -> Option<Self> {
        is_permutation_of_symbols(&order).then_some(Self(order))
    }

    /// The symbols in winning order.
    pub fn identity() -> Self {
        Self(SYMBOLS)
    }

    pub fn symbols(&self) -> &[char; 4] {
        &self.0
    }

    /// The ordering as displayed text.
    pub fn concat(&self) -> String {
        self.0.iter().collect()
    }
}

/// Produces permutations for the greeting card.
///
/// The card never draws randomness itself; the server plugs in a
/// [`Shuffler`] and tests plug in scripted sources.
pub trait PermutationSource {
    fn next_permutation(&mut self) -> Permutation;
}

/// Fisher–Yates over [`SYMBOLS`] driven by any `rand` generator.
#[derive(Debug)]
pub struct Shuffler<R> {
    rng: R,
}

impl<R: Rng> Shuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PermutationSource for Shuffler<R> {
    fn next_permutation(&mut self) -> Permutation {
        random_permutation(&mut self.rng)
    }
}

/// Shuffle a fresh copy of [`SYMBOLS`].
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R) -> Permutation {
    let mut order = SYMBOLS;
    shuffle(&mut order, rng);
    Permutation(order)
}

/// In-place Fisher–Yates shuffle.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// drawn index in `[0, i]`. Every ordering is equally likely when `rng` is
/// uniform.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// True if `order` contains every symbol exactly once and nothing else.
pub fn is_permutation_of_symbols(order: &[char]) -> bool {
    if order.len() != SYMBOLS.len() {
        return false;
    }
    SYMBOLS
        .iter()
        .all(|symbol| order.iter().filter(|c| *c == symbol).count() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_permutation_uses_every_symbol_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let perm = random_permutation(&mut rng);
            assert!(is_permutation_of_symbols(perm.symbols()), "{perm:?}");
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = Shuffler::new(StdRng::seed_from_u64(42));
        let mut b = Shuffler::new(StdRng::seed_from_u64(42));
        for _ in 0..50 {
            assert_eq!(a.next_permutation(), b.next_permutation());
        }
    }

    #[test]
    fn shuffle_handles_short_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = [9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [9]);
    }

    #[test]
    fn shuffle_keeps_multiset_of_longer_slices() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items: Vec<u32> = (0..100).collect();
        shuffle(&mut items, &mut rng);
        items.sort_unstable();
        assert_eq!(items, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn new_rejects_repeats_and_foreign_symbols() {
        assert!(Permutation::new(['謹', '謹', '新', '年']).is_none());
        assert!(Permutation::new(['謹', '賀', '新', '春']).is_none());
        assert!(Permutation::new(['年', '新', '賀', '謹']).is_some());
    }

    #[test]
    fn concat_joins_in_order() {
        let perm = Permutation::new(['年', '新', '賀', '謹']).expect("valid");
        assert_eq!(perm.concat(), "年新賀謹");
        assert_eq!(Permutation::identity().concat(), "謹賀新年");
    }

    #[test]
    fn length_mismatch_is_not_a_permutation() {
        assert!(!is_permutation_of_symbols(&['謹', '賀', '新']));
        assert!(!is_permutation_of_symbols(&['謹', '賀', '新', '年', '年']));
    }
}
