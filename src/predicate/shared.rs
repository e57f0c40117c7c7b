//! Type-erased, shared predicate handles

use super::combinators::Predicate;
use std::fmt;
use std::sync::Arc;

/// A reference-counted, type-erased predicate.
///
/// Cloning shares the underlying predicate instead of copying it, so the same
/// operand can appear in several composite predicates without any of them
/// borrowing from a temporary.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let positive = SharedPredicate::new(gt(0));
/// let small_positive = positive.clone().and(lt(10));
/// let large_positive = positive.and(gt(1000));
///
/// assert!(small_positive.is_satisfied(&3));
/// assert!(large_positive.is_satisfied(&5000));
/// ```
pub struct SharedPredicate<T: ?Sized> {
    inner: Arc<dyn Predicate<T>>,
}

impl<T: ?Sized> SharedPredicate<T> {
    /// Wrap a predicate in a shared handle.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Self {
            inner: Arc::new(predicate),
        }
    }

    /// Whether two handles point at the same predicate.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for SharedPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Predicate<T> for SharedPredicate<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.inner.is_satisfied(item)
    }
}

impl<T: ?Sized> From<Arc<dyn Predicate<T>>> for SharedPredicate<T> {
    fn from(inner: Arc<dyn Predicate<T>>) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized> fmt::Debug for SharedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPredicate")
            .field(&Arc::strong_count(&self.inner))
            .finish()
    }
}
