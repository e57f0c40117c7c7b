//! Comparison leaves
//!
//! Each predicate stores the value it compares against; the value is fixed
//! when the predicate is built.

use super::combinators::Predicate;

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $bound:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<T>(pub T);

        impl<T: $bound + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn is_satisfied(&self, item: &T) -> bool {
                *item $op self.0
            }
        }

        $(#[$meta])*
        pub fn $ctor<T: $bound + Send + Sync>(value: T) -> $name<T> {
            $name(value)
        }
    };
}

comparison!(
    /// Holds when the item equals the stored value.
    ///
    /// ```rust
    /// use criteria::predicate::*;
    ///
    /// assert!(eq("green").is_satisfied(&"green"));
    /// assert!(!eq(5).is_satisfied(&4));
    /// ```
    Eq, eq, PartialEq, ==
);

comparison!(
    /// Holds when the item differs from the stored value.
    Ne, ne, PartialEq, !=
);

comparison!(
    /// Holds when the item is strictly greater than the stored value.
    Gt, gt, PartialOrd, >
);

comparison!(
    /// Holds when the item is greater than or equal to the stored value.
    Ge, ge, PartialOrd, >=
);

comparison!(
    /// Holds when the item is strictly less than the stored value.
    Lt, lt, PartialOrd, <
);

comparison!(
    /// Holds when the item is less than or equal to the stored value.
    Le, le, PartialOrd, <=
);

/// Holds when the item lies in `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item >= self.min && *item <= self.max
    }
}

/// Create an inclusive range predicate.
///
/// An inverted range (`min > max`) is accepted and matches nothing.
///
/// ```rust
/// use criteria::predicate::*;
///
/// let weight_ok = between(100, 500);
/// assert!(weight_ok.is_satisfied(&100));
/// assert!(weight_ok.is_satisfied(&500));
/// assert!(!weight_ok.is_satisfied(&501));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}
