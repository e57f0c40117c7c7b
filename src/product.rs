//! A small product catalog domain with ready-made criteria
//!
//! Products carry a categorical [`Color`] and [`Size`]. Criteria such as
//! [`ColorIs`] and [`SizeIs`] are ordinary [`Predicate`]s, so they combine
//! with every combinator in [`predicate`](crate::predicate) and with
//! [`Criterion`](crate::Criterion) trees.
//!
//! ```rust
//! use criteria::predicate::*;
//! use criteria::product::{color_is, sample_catalog, size_is, Color, Size};
//! use criteria::Filter;
//!
//! let catalog = sample_catalog();
//! let wanted = or_(color_is(Color::Red), and_(size_is(Size::Large), color_is(Color::Blue)));
//! let names: Vec<&str> = Filter::new()
//!     .apply(&catalog, &wanted)
//!     .into_iter()
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, ["Bread", "Water", "Cherries"]);
//! ```

use crate::error::ParseAttributeError;
use crate::predicate::Predicate;
use crate::Filter;
use std::fmt;
use std::str::FromStr;

/// Product color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    const NAMES: &'static [&'static str] = &["red", "green", "blue"];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(ParseAttributeError::new("color", s, Self::NAMES)),
        }
    }
}

/// Product size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    /// Small
    Small,
    /// Medium
    Medium,
    /// Large
    Large,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    const NAMES: &'static [&'static str] = &["small", "medium", "large"];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(ParseAttributeError::new("size", s, Self::NAMES)),
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Color category.
    pub color: Color,
    /// Size category.
    pub size: Size,
}

impl Product {
    /// Create a product.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

/// Holds for products of the given color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorIs(pub Color);

impl Predicate<Product> for ColorIs {
    #[inline]
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color == self.0
    }
}

/// Create a color criterion.
pub fn color_is(color: Color) -> ColorIs {
    ColorIs(color)
}

/// Holds for products of the given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeIs(pub Size);

impl Predicate<Product> for SizeIs {
    #[inline]
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size == self.0
    }
}

/// Create a size criterion.
pub fn size_is(size: Size) -> SizeIs {
    SizeIs(size)
}

/// Holds for products whose name matches exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameIs(String);

impl Predicate<Product> for NameIs {
    #[inline]
    fn is_satisfied(&self, product: &Product) -> bool {
        product.name == self.0
    }
}

/// Create a name criterion.
pub fn name_is(name: impl Into<String>) -> NameIs {
    NameIs(name.into())
}

/// Fixed-purpose catalog queries.
///
/// Each query is a single call into the generic [`Filter`]; new queries are
/// better expressed as criteria than as new methods here.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductFilter;

impl ProductFilter {
    /// Products of one color.
    pub fn by_color(products: &[Product], color: Color) -> Vec<&Product> {
        Filter::new().apply(products, &color_is(color))
    }

    /// Products of one size.
    pub fn by_size(products: &[Product], size: Size) -> Vec<&Product> {
        Filter::new().apply(products, &size_is(size))
    }

    /// Products matching both a size and a color.
    pub fn by_size_and_color(products: &[Product], size: Size, color: Color) -> Vec<&Product> {
        use crate::predicate::PredicateExt;
        Filter::new().apply(products, &size_is(size).and(color_is(color)))
    }
}

/// The seven-item grocery catalog used throughout the docs and demos.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Bread", Color::Red, Size::Small),
        Product::new("Milk", Color::Green, Size::Small),
        Product::new("Water", Color::Blue, Size::Large),
        Product::new("Coffee", Color::Green, Size::Medium),
        Product::new("Tea", Color::Green, Size::Small),
        Product::new("Juice", Color::Blue, Size::Medium),
        Product::new("Cherries", Color::Red, Size::Large),
    ]
}
