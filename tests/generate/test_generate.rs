use finite_relations::{category::*, generate::*};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use proptest::prelude::any;
use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn relation_within_bounds(
        seed in any::<u64>(),
        n in 1usize..=9,
        min in 0usize..=6,
        extra in 0usize..=6,
    ) {
        let g = RelationGenerator::new(n, min, min + extra).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (r, draws) = g.generate_with_draws(&mut rng);

        prop_assert!(draws >= min && draws <= min + extra);
        prop_assert!(r.len() <= draws);
        prop_assert_eq!((r.source(), r.target()), (n, n));
        for (a, b) in r.iter() {
            prop_assert!(g.domain.contains(a) && g.domain.contains(b));
        }
        // stored pairs are strictly ascending, so none repeats
        prop_assert!(r.pairs().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn presets_within_bounds(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for g in [
            RelationGenerator::representations(),
            RelationGenerator::composition(),
            RelationGenerator::matrix_composition(),
        ] {
            let (r, draws) = g.generate_with_draws(&mut rng);
            prop_assert!(draws >= g.min_pairs && draws <= g.max_pairs);
            prop_assert!(r.len() <= draws);
            prop_assert_eq!(r.source(), g.domain.size());
        }
    }

    #[test]
    fn matrix_within_bounds(seed in any::<u64>(), n in 1usize..=5) {
        let g = MatrixGenerator::new(n, 1, 2 * n).unwrap();
        let m = g.generate(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(m.dims(), (n, n));
        prop_assert!(m.is_boolean());
        let ones = m.entries().filter(|(_, _, &x)| x == 1).count();
        prop_assert!(ones >= 1 && ones <= 2 * n);
    }
}

#[test]
fn presets_match_views() {
    let g = RelationGenerator::representations();
    assert_eq!((g.domain.size(), g.min_pairs, g.max_pairs), (9, 5, 10));
    let g = RelationGenerator::composition();
    assert_eq!((g.domain.size(), g.min_pairs, g.max_pairs), (5, 3, 6));
    let g = RelationGenerator::matrix_composition();
    assert_eq!((g.domain.size(), g.min_pairs, g.max_pairs), (4, 3, 6));
    let g = MatrixGenerator::boolean_products();
    assert_eq!((g.size, g.min_draws, g.max_draws), (4, 4, 9));
}

#[test]
fn seeded_generators_repeat() {
    let g = MatrixGenerator::default();
    let a = g.generate(&mut ChaCha8Rng::seed_from_u64(42));
    let b = g.generate(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
}
