//! Order-preserving selection of the items that satisfy a predicate
//!
//! [`Filter`] is stateless: it never mutates the collection it reads or the
//! items inside it, and it works for any item type and any predicate type.
//! Supporting a new kind of test only requires a new [`Predicate`]
//! implementation.
//!
//! With the `tracing` feature enabled, each selection emits a `debug` event
//! with the number of items inspected and matched.
//!
//! # Example
//!
//! ```rust
//! use criteria::predicate::*;
//! use criteria::Filter;
//!
//! let readings = [3, 18, 7, 42, 11];
//! let hot = Filter::new().apply(&readings, &gt(10));
//! assert_eq!(hot, vec![&18, &42, &11]);
//! ```

use crate::predicate::Predicate;

/// Selects, in order, the items of a slice that satisfy a predicate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Filter;

impl Filter {
    /// Create a filter.
    pub fn new() -> Self {
        Filter
    }

    /// Every item of `items` satisfying `predicate`, in original order.
    ///
    /// An empty result is a normal outcome.
    pub fn apply<'a, T, P>(&self, items: &'a [T], predicate: &P) -> Vec<&'a T>
    where
        P: Predicate<T> + ?Sized,
    {
        let matched: Vec<&'a T> = items.iter().satisfying(predicate).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(total = items.len(), matched = matched.len(), "filter applied");

        matched
    }

    /// Like [`apply`](Self::apply), but returns owned copies of the matches.
    pub fn apply_cloned<T, P>(&self, items: &[T], predicate: &P) -> Vec<T>
    where
        T: Clone,
        P: Predicate<T> + ?Sized,
    {
        self.apply(items, predicate).into_iter().cloned().collect()
    }

    /// Split `items` into the matching and the rejected ones, both in
    /// original order.
    ///
    /// ```rust
    /// use criteria::predicate::*;
    /// use criteria::Filter;
    ///
    /// let (even, odd) = Filter::new().partition(&[1, 2, 3, 4], &|x: &i32| x % 2 == 0);
    /// assert_eq!(even, vec![&2, &4]);
    /// assert_eq!(odd, vec![&1, &3]);
    /// ```
    pub fn partition<'a, T, P>(&self, items: &'a [T], predicate: &P) -> (Vec<&'a T>, Vec<&'a T>)
    where
        P: Predicate<T> + ?Sized,
    {
        let (matched, rejected): (Vec<&'a T>, Vec<&'a T>) =
            items.iter().partition(|item| predicate.is_satisfied(item));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            total = items.len(),
            matched = matched.len(),
            rejected = rejected.len(),
            "filter partitioned"
        );

        (matched, rejected)
    }

    /// Number of items satisfying `predicate`.
    pub fn count<T, P>(&self, items: &[T], predicate: &P) -> usize
    where
        P: Predicate<T> + ?Sized,
    {
        items.iter().satisfying(predicate).count()
    }

    /// The first item satisfying `predicate`, if any.
    pub fn first<'a, T, P>(&self, items: &'a [T], predicate: &P) -> Option<&'a T>
    where
        P: Predicate<T> + ?Sized,
    {
        items.iter().satisfying(predicate).next()
    }
}

/// Iterator adapter yielding only the items that satisfy a predicate.
///
/// Created by [`FilterExt::satisfying`].
#[derive(Debug)]
pub struct Satisfying<'p, I, P: ?Sized> {
    iter: I,
    predicate: &'p P,
}

impl<'a, 'p, T, I, P> Iterator for Satisfying<'p, I, P>
where
    T: 'a + ?Sized,
    I: Iterator<Item = &'a T>,
    P: Predicate<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.iter.find(|item| predicate.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Extension trait for filtering iterators of references by a predicate.
///
/// ```rust
/// use criteria::predicate::*;
/// use criteria::FilterExt;
///
/// let words = ["pear", "fig", "plum", "kiwi"];
/// let short: Vec<_> = words.iter().satisfying(&|w: &&str| w.len() <= 3).collect();
/// assert_eq!(short, vec![&"fig"]);
/// ```
pub trait FilterExt<'a, T: 'a + ?Sized>: Iterator<Item = &'a T> + Sized {
    /// Lazily keep only the items that satisfy `predicate`, preserving order.
    fn satisfying<'p, P>(self, predicate: &'p P) -> Satisfying<'p, Self, P>
    where
        P: Predicate<T> + ?Sized,
    {
        Satisfying {
            iter: self,
            predicate,
        }
    }
}

impl<'a, T: 'a + ?Sized, I: Iterator<Item = &'a T>> FilterExt<'a, T> for I {}

/// Iterator adapter yielding only the owned items that satisfy a predicate.
///
/// Created by [`FilterOwnedExt::satisfying_owned`].
#[derive(Debug)]
pub struct SatisfyingOwned<'p, I, P: ?Sized> {
    iter: I,
    predicate: &'p P,
}

impl<'p, I, P> Iterator for SatisfyingOwned<'p, I, P>
where
    I: Iterator,
    P: Predicate<I::Item> + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.iter.find(|item| predicate.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Extension trait for filtering iterators of owned items by a predicate.
///
/// ```rust
/// use criteria::predicate::*;
/// use criteria::FilterOwnedExt;
///
/// let big: Vec<i32> = vec![4, 40, 2, 20].into_iter().satisfying_owned(&ge(10)).collect();
/// assert_eq!(big, vec![40, 20]);
/// ```
pub trait FilterOwnedExt: Iterator + Sized {
    /// Lazily keep only the items that satisfy `predicate`, preserving order.
    fn satisfying_owned<'p, P>(self, predicate: &'p P) -> SatisfyingOwned<'p, Self, P>
    where
        P: Predicate<Self::Item> + ?Sized,
    {
        SatisfyingOwned {
            iter: self,
            predicate,
        }
    }
}

impl<I: Iterator> FilterOwnedExt for I {}
