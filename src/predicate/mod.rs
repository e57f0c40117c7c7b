//! Composable predicates over a single item.
//!
//! A [`Predicate`] is a pure boolean test. Leaf predicates carry the value
//! they compare against, fixed at construction; composite predicates
//! ([`And`], [`Or`], [`Not`]) combine other predicates and are predicates
//! themselves, so trees of any depth can be built from explicit combinator
//! calls.
//!
//! # Example
//!
//! ```rust
//! use criteria::predicate::*;
//!
//! // (0, 10) or above 100
//! let p = or_(gt(0).and(lt(10)), gt(100));
//! assert!(p.is_satisfied(&5));
//! assert!(p.is_satisfied(&150));
//! assert!(!p.is_satisfied(&50));
//! ```
//!
//! # Projection
//!
//! A predicate over a field can be lifted to a predicate over the whole item:
//!
//! ```rust
//! use criteria::predicate::*;
//!
//! struct Reading {
//!     celsius: i32,
//! }
//!
//! let freezing = le(0).project(|r: &Reading| &r.celsius);
//! assert!(freezing.is_satisfied(&Reading { celsius: -4 }));
//! assert!(!freezing.is_satisfied(&Reading { celsius: 12 }));
//! ```

mod combinators;
mod compare;
mod project;
mod shared;

pub mod prelude;

// Core trait
pub use combinators::{Predicate, PredicateExt};

// Combinators
pub use combinators::{
    all_of, always, and_, any_of, never, none_of, not_, or_, AllOf, Always, And, AnyOf, Never,
    NoneOf, Not, Or,
};

// Comparison leaves
pub use compare::{between, eq, ge, gt, le, lt, ne, Between, Eq, Ge, Gt, Le, Lt, Ne};

pub use project::{project, Project};
pub use shared::SharedPredicate;
