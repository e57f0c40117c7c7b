//! Lifting field predicates to whole-item predicates

use super::combinators::Predicate;
use std::fmt;
use std::marker::PhantomData;

/// A predicate over `V` evaluated against the part of a wider item that
/// `accessor` selects.
///
/// Created by [`project`] or [`PredicateExt::project`](super::PredicateExt::project).
pub struct Project<F, P, V: ?Sized> {
    accessor: F,
    predicate: P,
    _field: PhantomData<fn(&V)>,
}

impl<T, V, F, P> Predicate<T> for Project<F, P, V>
where
    T: ?Sized,
    V: ?Sized,
    F: Fn(&T) -> &V + Send + Sync,
    P: Predicate<V>,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.predicate.is_satisfied((self.accessor)(item))
    }
}

impl<F: Clone, P: Clone, V: ?Sized> Clone for Project<F, P, V> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            predicate: self.predicate.clone(),
            _field: PhantomData,
        }
    }
}

impl<F, P: fmt::Debug, V: ?Sized> fmt::Debug for Project<F, P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

/// Evaluate `predicate` against the field `accessor` selects.
///
/// ```rust
/// use criteria::predicate::*;
///
/// struct Parcel {
///     grams: u32,
/// }
///
/// let light = project(|p: &Parcel| &p.grams, lt(1_000));
/// assert!(light.is_satisfied(&Parcel { grams: 250 }));
/// assert!(!light.is_satisfied(&Parcel { grams: 4_000 }));
/// ```
pub fn project<T, V, F, P>(accessor: F, predicate: P) -> Project<F, P, V>
where
    T: ?Sized,
    V: ?Sized,
    F: Fn(&T) -> &V + Send + Sync,
    P: Predicate<V>,
{
    Project {
        accessor,
        predicate,
        _field: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{eq, gt, PredicateExt};

    struct Point {
        x: i32,
        y: i32,
        label: String,
    }

    fn origin() -> Point {
        Point {
            x: 0,
            y: 0,
            label: "origin".to_string(),
        }
    }

    #[test]
    fn test_project_field() {
        let right_half = project(|p: &Point| &p.x, gt(0));
        assert!(!right_half.is_satisfied(&origin()));
        assert!(right_half.is_satisfied(&Point { x: 3, ..origin() }));
    }

    #[test]
    fn test_project_unsized_field() {
        let named_origin = project(|p: &Point| p.label.as_str(), |s: &str| s == "origin");
        assert!(named_origin.is_satisfied(&origin()));
    }

    #[test]
    fn test_projections_compose() {
        let first_quadrant = gt(0)
            .project(|p: &Point| &p.x)
            .and(gt(0).project(|p: &Point| &p.y));
        assert!(first_quadrant.is_satisfied(&Point {
            x: 1,
            y: 2,
            ..origin()
        }));
        assert!(!first_quadrant.is_satisfied(&Point { x: 1, ..origin() }));
    }

    #[test]
    fn test_project_debug_shows_inner() {
        let p = project(|p: &Point| &p.y, eq(7));
        assert!(format!("{:?}", p).contains("Eq(7)"));
    }
}
