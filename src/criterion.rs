//! Predicate expression trees with a closed set of node kinds
//!
//! [`Criterion`] is the type-erased counterpart of the generic combinators in
//! [`predicate`](crate::predicate). Generic combinators encode the shape of an
//! expression in its type, which is ideal when the expression is fixed at
//! compile time. A `Criterion` keeps the shape as data instead, so
//! expressions can be assembled at runtime (from user choices, a loop, a
//! list of optional filters) while still being a single concrete type.
//!
//! Every node owns its children and leaves are held through
//! [`SharedPredicate`], so a tree never borrows from the expressions that
//! built it.
//!
//! # Example
//!
//! ```rust
//! use criteria::predicate::*;
//! use criteria::Criterion;
//!
//! // even or (above 100 and below 200)
//! let tree = Criterion::or_(
//!     Criterion::leaf(|x: &i32| x % 2 == 0),
//!     Criterion::and_(Criterion::leaf(gt(100)), Criterion::leaf(lt(200))),
//! );
//!
//! assert!(tree.is_satisfied(&4));
//! assert!(tree.is_satisfied(&151));
//! assert!(!tree.is_satisfied(&251));
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.leaf_count(), 3);
//! ```

use crate::predicate::{Always, Never, Predicate, SharedPredicate};
use std::fmt;

/// A node in a predicate expression tree.
pub enum Criterion<T: ?Sized> {
    /// A leaf test.
    Leaf(SharedPredicate<T>),
    /// Both sub-trees must hold.
    And(Box<Criterion<T>>, Box<Criterion<T>>),
    /// Either sub-tree must hold.
    Or(Box<Criterion<T>>, Box<Criterion<T>>),
    /// The sub-tree must not hold.
    Not(Box<Criterion<T>>),
}

impl<T: ?Sized> Criterion<T> {
    /// Wrap any predicate as a leaf node.
    pub fn leaf<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Criterion::Leaf(SharedPredicate::new(predicate))
    }

    /// Conjunction of two trees.
    pub fn and_(left: Criterion<T>, right: Criterion<T>) -> Self {
        Criterion::And(Box::new(left), Box::new(right))
    }

    /// Disjunction of two trees.
    pub fn or_(left: Criterion<T>, right: Criterion<T>) -> Self {
        Criterion::Or(Box::new(left), Box::new(right))
    }

    /// Negation of a tree.
    pub fn not_(inner: Criterion<T>) -> Self {
        Criterion::Not(Box::new(inner))
    }

    /// Fold a sequence of trees with AND.
    ///
    /// The result is balanced, so its depth grows with the logarithm of the
    /// number of inputs. Operands are still evaluated left to right.
    /// An empty sequence yields a tree that accepts every item.
    ///
    /// ```rust
    /// use criteria::predicate::*;
    /// use criteria::Criterion;
    ///
    /// let none: Vec<Criterion<i32>> = Vec::new();
    /// assert!(Criterion::all(none).is_satisfied(&7));
    ///
    /// let bounds = Criterion::all([Criterion::leaf(gt(0)), Criterion::leaf(lt(10))]);
    /// assert!(bounds.is_satisfied(&5));
    /// assert!(!bounds.is_satisfied(&10));
    /// ```
    pub fn all<I>(criteria: I) -> Self
    where
        I: IntoIterator<Item = Criterion<T>>,
    {
        balanced(criteria.into_iter().collect(), Criterion::and_)
            .unwrap_or_else(|| Criterion::leaf(Always))
    }

    /// Fold a sequence of trees with OR.
    ///
    /// Balanced like [`all`](Self::all). An empty sequence yields a tree that rejects every item.
    pub fn any<I>(criteria: I) -> Self
    where
        I: IntoIterator<Item = Criterion<T>>,
    {
        balanced(criteria.into_iter().collect(), Criterion::or_)
            .unwrap_or_else(|| Criterion::leaf(Never))
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Criterion::Leaf(_))
    }

    /// Number of levels in the tree; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Criterion::Leaf(_) => 1,
            Criterion::And(l, r) | Criterion::Or(l, r) => 1 + l.depth().max(r.depth()),
            Criterion::Not(inner) => 1 + inner.depth(),
        }
    }

    /// Number of leaf tests in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Criterion::Leaf(_) => 1,
            Criterion::And(l, r) | Criterion::Or(l, r) => l.leaf_count() + r.leaf_count(),
            Criterion::Not(inner) => inner.leaf_count(),
        }
    }
}

/// Join neighbouring nodes pairwise until one remains.
fn balanced<T: ?Sized>(
    mut nodes: Vec<Criterion<T>>,
    join: fn(Criterion<T>, Criterion<T>) -> Criterion<T>,
) -> Option<Criterion<T>> {
    while nodes.len() > 1 {
        let mut joined = Vec::with_capacity(nodes.len().div_ceil(2));
        let mut iter = nodes.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => joined.push(join(left, right)),
                None => joined.push(left),
            }
        }
        nodes = joined;
    }
    nodes.pop()
}

impl<T: ?Sized> Predicate<T> for Criterion<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        match self {
            Criterion::Leaf(p) => p.is_satisfied(item),
            Criterion::And(l, r) => l.is_satisfied(item) && r.is_satisfied(item),
            Criterion::Or(l, r) => l.is_satisfied(item) || r.is_satisfied(item),
            Criterion::Not(inner) => !inner.is_satisfied(item),
        }
    }
}

impl<T: ?Sized> Clone for Criterion<T> {
    fn clone(&self) -> Self {
        match self {
            Criterion::Leaf(p) => Criterion::Leaf(p.clone()),
            Criterion::And(l, r) => Criterion::And(l.clone(), r.clone()),
            Criterion::Or(l, r) => Criterion::Or(l.clone(), r.clone()),
            Criterion::Not(inner) => Criterion::Not(inner.clone()),
        }
    }
}

impl<T: ?Sized> From<SharedPredicate<T>> for Criterion<T> {
    fn from(predicate: SharedPredicate<T>) -> Self {
        Criterion::Leaf(predicate)
    }
}

impl<T: ?Sized> fmt::Debug for Criterion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Leaf(_) => f.write_str("Leaf"),
            Criterion::And(l, r) => f.debug_tuple("And").field(l).field(r).finish(),
            Criterion::Or(l, r) => f.debug_tuple("Or").field(l).field(r).finish(),
            Criterion::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{eq, gt, lt, PredicateExt};

    fn leaf_gt(n: i32) -> Criterion<i32> {
        Criterion::leaf(gt(n))
    }

    #[test]
    fn test_leaf() {
        let c = leaf_gt(3);
        assert!(c.is_leaf());
        assert!(c.is_satisfied(&4));
        assert!(!c.is_satisfied(&3));
    }

    #[test]
    fn test_matches_generic_combinators() {
        let tree = Criterion::or_(
            Criterion::leaf(eq(1)),
            Criterion::and_(leaf_gt(5), Criterion::not_(Criterion::leaf(lt(0)))),
        );
        let generic = eq(1).or(gt(5).and(lt(0).not()));
        for x in -10..20 {
            assert_eq!(tree.is_satisfied(&x), generic.is_satisfied(&x), "x = {}", x);
        }
    }

    #[test]
    fn test_any_empty_rejects() {
        let none: Vec<Criterion<i32>> = Vec::new();
        let c = Criterion::any(none);
        assert!(!c.is_satisfied(&0));
    }

    #[test]
    fn test_any_folds_with_or() {
        let c = Criterion::any((0..3).map(|n| Criterion::leaf(eq(n * 10))));
        assert!(c.is_satisfied(&0));
        assert!(c.is_satisfied(&20));
        assert!(!c.is_satisfied(&5));
        assert_eq!(c.leaf_count(), 3);
    }

    #[test]
    fn test_long_runtime_list_stays_shallow() {
        let any = Criterion::any((0..100_000).map(|n| Criterion::leaf(eq(n))));
        assert_eq!(any.leaf_count(), 100_000);
        assert_eq!(any.depth(), 18);
        assert_eq!(
            crate::Filter::new().apply(&[-1, 5, 99_999, 100_000], &any),
            vec![&5, &99_999]
        );

        let all = Criterion::all((0..100_000).map(|_| leaf_gt(-1)));
        assert_eq!(all.depth(), 18);
        assert!(all.clone().is_satisfied(&0));
        assert!(!all.is_satisfied(&-1));
    }

    #[test]
    fn test_fold_keeps_left_to_right_order() {
        let c = Criterion::all((1..=5).map(leaf_gt));
        assert_eq!(
            format!("{:?}", c),
            "And(And(And(Leaf, Leaf), And(Leaf, Leaf)), Leaf)"
        );
        assert_eq!(Criterion::any([leaf_gt(0)]).depth(), 1);
    }

    #[test]
    fn test_depth_and_leaf_count() {
        let c = Criterion::and_(leaf_gt(0), Criterion::not_(leaf_gt(10)));
        assert_eq!(c.depth(), 3);
        assert_eq!(c.leaf_count(), 2);
    }

    #[test]
    fn test_deep_tree() {
        let c = (0..200).fold(leaf_gt(-1), |acc, _| Criterion::and_(acc, leaf_gt(-1)));
        assert_eq!(c.depth(), 201);
        assert_eq!(c.leaf_count(), 201);
        assert!(c.is_satisfied(&0));
        assert!(!c.is_satisfied(&-1));
    }

    #[test]
    fn test_clone_shares_leaves() {
        let original = Criterion::and_(leaf_gt(0), leaf_gt(1));
        let copy = original.clone();
        match (&original, &copy) {
            (Criterion::And(a, _), Criterion::And(b, _)) => match (&**a, &**b) {
                (Criterion::Leaf(x), Criterion::Leaf(y)) => assert!(x.ptr_eq(y)),
                _ => panic!("expected leaves"),
            },
            _ => panic!("expected And nodes"),
        }
    }

    #[test]
    fn test_debug_shape() {
        let c = Criterion::and_(leaf_gt(0), Criterion::or_(leaf_gt(1), leaf_gt(2)));
        assert_eq!(format!("{:?}", c), "And(Leaf, Or(Leaf, Leaf))");
    }

    #[test]
    fn test_criterion_composes_with_generic_combinators() {
        let c = leaf_gt(0).and(lt(10));
        assert!(c.is_satisfied(&5));
        assert!(!c.is_satisfied(&50));
    }
}
