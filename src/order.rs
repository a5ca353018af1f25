//! Presentation order for evaluation results.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::catalog::EdgeCase;

/// How cases are ordered before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Catalog order.
    #[default]
    Catalog,
    /// A permutation determined entirely by `seed`.
    Shuffled { seed: u64 },
}

/// Return `cases` reordered according to `order`.
///
/// The result is always a permutation of the input, and the same seed always
/// gives the same permutation.
///
/// ```rust
/// use regex_roulette::catalog::catalog;
/// use regex_roulette::order::{Order, permute};
///
/// let cases = catalog();
/// let once = permute(&cases, Order::Shuffled { seed: 9 });
/// assert_eq!(once, permute(&cases, Order::Shuffled { seed: 9 }));
/// assert_eq!(once.len(), cases.len());
/// ```
pub fn permute(cases: &[EdgeCase], order: Order) -> Vec<EdgeCase> {
    let mut permuted = cases.to_vec();
    if let Order::Shuffled { seed } = order {
        let mut rng = StdRng::seed_from_u64(seed);
        permuted.shuffle(&mut rng);
    }
    permuted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn sorted_subjects(cases: &[EdgeCase]) -> Vec<&'static str> {
        let mut subjects: Vec<_> = cases.iter().map(|c| c.subject).collect();
        subjects.sort_unstable();
        subjects
    }

    #[test]
    fn test_catalog_order_is_identity() {
        assert_eq!(permute(&catalog(), Order::Catalog), catalog());
    }

    #[test]
    fn test_default_is_catalog() {
        assert_eq!(Order::default(), Order::Catalog);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let cases = catalog();
        for seed in 0..50 {
            let shuffled = permute(&cases, Order::Shuffled { seed });
            assert_eq!(shuffled.len(), cases.len());
            assert_eq!(sorted_subjects(&shuffled), sorted_subjects(&cases));
        }
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let cases = catalog();
        let a = permute(&cases, Order::Shuffled { seed: 42 });
        let b = permute(&cases, Order::Shuffled { seed: 42 });
        assert_eq!(a, b);
    }

    #[test]
    fn test_some_seed_changes_order() {
        let cases = catalog();
        assert!(
            (0..50).any(|seed| permute(&cases, Order::Shuffled { seed }) != cases),
            "fifty seeds should not all yield catalog order"
        );
    }

    #[test]
    fn test_shuffle_empty() {
        assert!(permute(&[], Order::Shuffled { seed: 7 }).is_empty());
    }
}
