//! Core predicate trait and logical combinators

/// A pure boolean test over values of type `T`.
///
/// Implementations must not mutate shared state: the same predicate may be
/// evaluated any number of times, from any number of threads.
///
/// Any `Fn(&T) -> bool` closure is a predicate, so new leaf variants never
/// require changes to this trait or to [`Filter`](crate::Filter).
///
/// # Example
///
/// ```rust
/// use criteria::predicate::*;
///
/// let plausible_age = ge(0).and(le(150));
/// assert!(plausible_age.is_satisfied(&25));
/// assert!(!plausible_age.is_satisfied(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check whether `item` satisfies this predicate.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

/// Extension trait providing named combinators as methods.
///
/// Every method consumes `self` and returns a new concrete predicate; neither
/// operand is modified.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let outside = gt(0).and(lt(100)).not();
/// assert!(outside.is_satisfied(&-5));
/// assert!(!outside.is_satisfied(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// ```rust
    /// use criteria::predicate::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.is_satisfied(&50));
    /// assert!(!p.is_satisfied(&0));
    /// assert!(!p.is_satisfied(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// ```rust
    /// use criteria::predicate::*;
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.is_satisfied(&-5));
    /// assert!(p.is_satisfied(&150));
    /// assert!(!p.is_satisfied(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Evaluate this predicate against a field of a wider item.
    ///
    /// See [`project`](super::project()).
    fn project<U, F>(self, accessor: F) -> super::Project<F, Self, T>
    where
        U: ?Sized,
        F: Fn(&U) -> &T + Send + Sync,
    {
        super::project(accessor, self)
    }

    /// Erase the concrete type behind a cheaply cloneable shared handle.
    fn shared(self) -> super::SharedPredicate<T>
    where
        Self: 'static,
    {
        super::SharedPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction of two predicates.
///
/// The right operand is only evaluated when the left one holds.
#[derive(Clone, Copy, Debug)]
pub struct And<P, Q>(pub P, pub Q);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for And<P, Q> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) && self.1.is_satisfied(item)
    }
}

/// Disjunction of two predicates.
///
/// The right operand is only evaluated when the left one fails.
#[derive(Clone, Copy, Debug)]
pub struct Or<P, Q>(pub P, pub Q);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for Or<P, Q> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) || self.1.is_satisfied(item)
    }
}

/// Negation of a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        !self.0.is_satisfied(item)
    }
}

/// Combine two predicates with AND.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let small_positive = and_(gt(0), lt(10));
/// assert!(small_positive.is_satisfied(&3));
/// assert!(!small_positive.is_satisfied(&12));
/// ```
pub fn and_<P, Q>(left: P, right: Q) -> And<P, Q> {
    And(left, right)
}

/// Combine two predicates with OR.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let extreme = or_(lt(-100), gt(100));
/// assert!(extreme.is_satisfied(&-500));
/// assert!(!extreme.is_satisfied(&0));
/// ```
pub fn or_<P, Q>(left: P, right: Q) -> Or<P, Q> {
    Or(left, right)
}

/// Negate a predicate.
pub fn not_<P>(inner: P) -> Not<P> {
    Not(inner)
}

/// Predicate that holds for every item.
#[derive(Clone, Copy, Default, Debug)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    #[inline]
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Create a predicate that accepts everything.
pub fn always() -> Always {
    Always
}

/// Predicate that holds for no item.
#[derive(Clone, Copy, Default, Debug)]
pub struct Never;

impl<T: ?Sized> Predicate<T> for Never {
    #[inline]
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// Create a predicate that rejects everything.
pub fn never() -> Never {
    Never
}

/// Every predicate of a homogeneous group must hold.
///
/// The group is either a fixed-size array or a `Vec` assembled at runtime;
/// chain `.and()` for predicates of mixed types.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<C>(pub C);

/// At least one predicate of a homogeneous group must hold.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<C>(pub C);

/// No predicate of a homogeneous group may hold.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<C>(pub C);

fn all_hold<T: ?Sized, P: Predicate<T>>(group: &[P], item: &T) -> bool {
    group.iter().all(|p| p.is_satisfied(item))
}

fn any_holds<T: ?Sized, P: Predicate<T>>(group: &[P], item: &T) -> bool {
    group.iter().any(|p| p.is_satisfied(item))
}

fn none_holds<T: ?Sized, P: Predicate<T>>(group: &[P], item: &T) -> bool {
    !any_holds(group, item)
}

macro_rules! group_predicate {
    ($name:ident, $eval:ident) => {
        impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for $name<[P; N]> {
            #[inline]
            fn is_satisfied(&self, item: &T) -> bool {
                $eval(&self.0, item)
            }
        }

        impl<T: ?Sized, P: Predicate<T>> Predicate<T> for $name<Vec<P>> {
            #[inline]
            fn is_satisfied(&self, item: &T) -> bool {
                $eval(&self.0, item)
            }
        }
    };
}

group_predicate!(AllOf, all_hold);
group_predicate!(AnyOf, any_holds);
group_predicate!(NoneOf, none_holds);

/// Create a predicate requiring every member of `predicates` to hold.
///
/// An empty group accepts everything.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let above_all = all_of([gt(0), gt(-10), gt(-100)]);
/// assert!(above_all.is_satisfied(&50));
/// assert!(!above_all.is_satisfied(&-50));
///
/// // built at runtime
/// let limits = vec![3, 7, 11];
/// let below_every_limit = all_of(limits.into_iter().map(lt).collect::<Vec<_>>());
/// assert!(below_every_limit.is_satisfied(&2));
/// assert!(!below_every_limit.is_satisfied(&5));
/// ```
pub fn all_of<C>(predicates: C) -> AllOf<C> {
    AllOf(predicates)
}

/// Create a predicate requiring at least one member of `predicates` to hold.
///
/// An empty group rejects everything.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let special = any_of([eq(1), eq(5), eq(10)]);
/// assert!(special.is_satisfied(&5));
/// assert!(!special.is_satisfied(&7));
/// ```
pub fn any_of<C>(predicates: C) -> AnyOf<C> {
    AnyOf(predicates)
}

/// Create a predicate requiring that no member of `predicates` holds.
pub fn none_of<C>(predicates: C) -> NoneOf<C> {
    NoneOf(predicates)
}
