//! # Criteria
//!
//! Composable boolean criteria and order-preserving collection filters.
//!
//! ## Philosophy
//!
//! Filtering code tends to grow one method per query: `by_color`,
//! `by_size`, `by_size_and_color`, and so on. **Criteria** keeps the
//! [`Filter`] closed for modification and open for extension: every query is
//! a [`Predicate`](predicate::Predicate), predicates compose through named
//! combinators, and the filter never changes when a new kind of test
//! appears.
//!
//! - **Leaves** test one item against a value fixed at construction
//! - **Composites** (`and_`, `or_`, `not_`) combine predicates into new ones
//! - **Filters** select, in order, the items satisfying a predicate
//!
//! ## Quick Example
//!
//! ```rust
//! use criteria::predicate::*;
//! use criteria::product::{color_is, size_is, Color, Product, Size};
//! use criteria::Filter;
//!
//! let items = vec![
//!     Product::new("Bread", Color::Red, Size::Small),
//!     Product::new("Milk", Color::Green, Size::Small),
//!     Product::new("Water", Color::Blue, Size::Large),
//! ];
//!
//! let green = Filter::new().apply(&items, &color_is(Color::Green));
//! assert_eq!(green, vec![&items[1]]);
//!
//! // red or (large and blue)
//! let wanted = or_(color_is(Color::Red), and_(size_is(Size::Large), color_is(Color::Blue)));
//! let picked = Filter::new().apply(&items, &wanted);
//! assert_eq!(picked, vec![&items[0], &items[2]]);
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit `debug` events from [`Filter`] with item and match counts
//! - `serde`: `Serialize`/`Deserialize` for the [`product`] types
//! - `proptest`: `Arbitrary` implementations for the [`product`] types

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod criterion;
pub mod error;
pub mod filter;
pub mod predicate;
pub mod product;
pub mod testing;

// Re-exports
pub use criterion::Criterion;
pub use error::ParseAttributeError;
pub use filter::{Filter, FilterExt, FilterOwnedExt, Satisfying, SatisfyingOwned};
pub use predicate::{Predicate, PredicateExt, SharedPredicate};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::criterion::Criterion;
    pub use crate::filter::{Filter, FilterExt, FilterOwnedExt};
    pub use crate::predicate::prelude::*;
}
