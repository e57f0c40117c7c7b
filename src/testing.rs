//! Testing utilities for code built on predicates and filters
//!
//! # Assertion Macros
//!
//! ```rust
//! use criteria::predicate::*;
//! use criteria::{assert_selects, assert_selects_none};
//!
//! let readings = vec![3, 18, 7, 42];
//! assert_selects!(readings, gt(10), [18, 42]);
//! assert_selects_none!(readings, lt(0));
//! ```
//!
//! Items without `PartialEq`, or where only one field matters, can be
//! compared through a key:
//!
//! ```rust
//! use criteria::assert_selects;
//! use criteria::product::{color_is, sample_catalog, Color, Product};
//!
//! let catalog = sample_catalog();
//! assert_selects!(catalog, color_is(Color::Blue), ["Water", "Juice"], by |p: &Product| p.name.as_str());
//! ```
//!
//! # Property-Based Testing
//!
//! With the `proptest` feature, [`Color`](crate::product::Color),
//! [`Size`](crate::product::Size) and [`Product`](crate::product::Product)
//! implement `proptest::arbitrary::Arbitrary`.

use crate::predicate::Predicate;
use crate::Filter;

/// Keys of the selected items, in selection order.
///
/// Used by [`assert_selects!`](crate::assert_selects); handy on its own when a
/// test wants to inspect a selection through a single field.
pub fn selected_keys<'a, T, K, P, F>(items: &'a [T], predicate: &P, key: F) -> Vec<K>
where
    P: Predicate<T> + ?Sized,
    F: FnMut(&'a T) -> K,
{
    Filter::new()
        .apply(items, predicate)
        .into_iter()
        .map(key)
        .collect()
}

/// Assert that filtering a collection selects exactly the expected items,
/// in order.
///
/// The collection is anything indexable by `[..]` (arrays, `Vec`, slices).
/// With `by <key>`, each selected item is mapped through `key` before the
/// comparison.
#[macro_export]
macro_rules! assert_selects {
    ($items:expr, $predicate:expr, $expected:expr) => {
        $crate::assert_selects!($items, $predicate, $expected, by |item| ::std::clone::Clone::clone(item))
    };
    ($items:expr, $predicate:expr, $expected:expr, by $key:expr) => {{
        let selected = $crate::testing::selected_keys(&$items[..], &$predicate, $key);
        let expected: ::std::vec::Vec<_> =
            ::std::iter::IntoIterator::into_iter($expected).collect();
        if selected != expected {
            panic!(
                "Expected selection {:?}, got {:?}",
                expected, selected
            );
        }
    }};
}

/// Assert that filtering a collection selects nothing.
#[macro_export]
macro_rules! assert_selects_none {
    ($items:expr, $predicate:expr) => {{
        let selected = $crate::Filter::new().apply(&$items[..], &$predicate);
        if !selected.is_empty() {
            panic!("Expected empty selection, got {:?}", selected);
        }
    }};
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use crate::product::{Color, Product, Size};
    use proptest::prelude::*;

    impl Arbitrary for Color {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(Color::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for Size {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(Size::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for Product {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            ("[A-Z][a-z]{0,9}", any::<Color>(), any::<Size>())
                .prop_map(|(name, color, size)| Product::new(name, color, size))
                .boxed()
        }
    }
}
