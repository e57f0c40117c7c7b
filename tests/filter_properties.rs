//! Property-based tests for filtering and composition

use criteria::predicate::*;
use criteria::product::{color_is, size_is, Color, Product, Size};
use criteria::{Criterion, Filter};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn arb_size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

fn arb_product() -> impl Strategy<Value = Product> {
    ("[A-Z][a-z]{0,6}", arb_color(), arb_size())
        .prop_map(|(name, color, size)| Product::new(name, color, size))
}

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..40)
}

/// Leaf criteria over products, type-erased so they can be nested.
fn arb_leaf() -> impl Strategy<Value = Criterion<Product>> {
    prop_oneof![
        arb_color().prop_map(|c| Criterion::leaf(color_is(c))),
        arb_size().prop_map(|s| Criterion::leaf(size_is(s))),
    ]
}

fn arb_criterion() -> impl Strategy<Value = Criterion<Product>> {
    arb_leaf().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Criterion::and_(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Criterion::or_(l, r)),
            inner.prop_map(Criterion::not_),
        ]
    })
}

fn positions(catalog: &[Product], selected: &[&Product]) -> Vec<usize> {
    selected
        .iter()
        .map(|s| {
            catalog
                .iter()
                .position(|p| std::ptr::eq(p, *s))
                .expect("selection must point into the catalog")
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_selection_is_exact_and_ordered(
        catalog in arb_catalog(),
        criterion in arb_criterion(),
    ) {
        let selected = Filter::new().apply(&catalog, &criterion);
        let idx = positions(&catalog, &selected);

        // strictly increasing: original order, no duplicates
        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
        // soundness
        prop_assert!(selected.iter().all(|p| criterion.is_satisfied(p)));
        // completeness
        let expected: Vec<usize> = catalog
            .iter()
            .enumerate()
            .filter(|(_, p)| criterion.is_satisfied(p))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(idx, expected);
    }

    #[test]
    fn prop_and_is_ordered_intersection(
        catalog in arb_catalog(),
        p in arb_criterion(),
        q in arb_criterion(),
    ) {
        let filter = Filter::new();
        let left = positions(&catalog, &filter.apply(&catalog, &p));
        let right = positions(&catalog, &filter.apply(&catalog, &q));
        let both = positions(&catalog, &filter.apply(&catalog, &and_(p, q)));
        let expected: Vec<usize> = left.into_iter().filter(|i| right.contains(i)).collect();
        prop_assert_eq!(both, expected);
    }

    #[test]
    fn prop_or_is_ordered_union(
        catalog in arb_catalog(),
        p in arb_criterion(),
        q in arb_criterion(),
    ) {
        let filter = Filter::new();
        let left = positions(&catalog, &filter.apply(&catalog, &p));
        let right = positions(&catalog, &filter.apply(&catalog, &q));
        let either = positions(&catalog, &filter.apply(&catalog, &or_(p, q)));
        let expected: Vec<usize> = (0..catalog.len())
            .filter(|i| left.contains(i) || right.contains(i))
            .collect();
        prop_assert_eq!(either, expected);
    }

    #[test]
    fn prop_filter_is_idempotent(
        catalog in arb_catalog(),
        criterion in arb_criterion(),
    ) {
        let filter = Filter::new();
        let once = filter.apply_cloned(&catalog, &criterion);
        let twice = filter.apply_cloned(&once, &criterion);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_always_keeps_everything(catalog in arb_catalog()) {
        let all = Filter::new().apply_cloned(&catalog, &always());
        prop_assert_eq!(all, catalog);
    }

    #[test]
    fn prop_empty_collection_yields_empty(criterion in arb_criterion()) {
        let empty: Vec<Product> = Vec::new();
        prop_assert!(Filter::new().apply(&empty, &criterion).is_empty());
    }

    #[test]
    fn prop_partition_covers_input(
        catalog in arb_catalog(),
        criterion in arb_criterion(),
    ) {
        let filter = Filter::new();
        let (matched, rejected) = filter.partition(&catalog, &criterion);
        prop_assert_eq!(matched.len() + rejected.len(), catalog.len());
        prop_assert_eq!(matched.len(), filter.count(&catalog, &criterion));
        prop_assert!(rejected.iter().all(|p| !criterion.is_satisfied(p)));
    }

    #[test]
    fn prop_generic_and_tree_forms_agree(
        product in arb_product(),
        c1 in arb_color(),
        c2 in arb_color(),
        s in arb_size(),
    ) {
        let generic = or_(color_is(c1), and_(size_is(s), color_is(c2)));
        let tree = Criterion::or_(
            Criterion::leaf(color_is(c1)),
            Criterion::and_(Criterion::leaf(size_is(s)), Criterion::leaf(color_is(c2))),
        );
        prop_assert_eq!(generic.is_satisfied(&product), tree.is_satisfied(&product));
    }
}
