//! Predicate prelude for convenient imports
//!
//! ```rust
//! use criteria::predicate::prelude::*;
//!
//! let in_range = ge(0).and(le(150));
//! assert!(in_range.is_satisfied(&25));
//! ```

pub use super::combinators::{Predicate, PredicateExt};

pub use super::combinators::{all_of, always, and_, any_of, never, none_of, not_, or_};

pub use super::compare::{between, eq, ge, gt, le, lt, ne};

pub use super::project::project;
pub use super::shared::SharedPredicate;
