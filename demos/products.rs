//! Product Catalog Example
//!
//! Filters a small grocery catalog with single criteria, composite
//! criteria, and a criterion tree assembled from runtime choices.
//!
//! Run with: cargo run --example products -- [color] [size]

use criteria::prelude::*;
use criteria::product::{color_is, sample_catalog, size_is, Color, Product, ProductFilter, Size};
use criteria::ParseAttributeError;

fn main() {
    println!("=== Product Catalog Example ===\n");

    let catalog = sample_catalog();

    fixed_queries(&catalog);
    composite_criteria(&catalog);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = runtime_query(&catalog, &args) {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }
}

fn print_all(title: &str, products: &[&Product]) {
    println!("{}:", title);
    if products.is_empty() {
        println!("  (none)");
    }
    for p in products {
        println!("  {}", p);
    }
    println!();
}

/// One method per query
fn fixed_queries(catalog: &[Product]) {
    println!("--- Fixed Queries ---\n");

    print_all("green", &ProductFilter::by_color(catalog, Color::Green));
    print_all("large", &ProductFilter::by_size(catalog, Size::Large));
    print_all(
        "small and green",
        &ProductFilter::by_size_and_color(catalog, Size::Small, Color::Green),
    );
}

/// Queries built from reusable criteria
fn composite_criteria(catalog: &[Product]) {
    println!("--- Composite Criteria ---\n");

    let filter = Filter::new();

    let red_or_large_blue = or_(
        color_is(Color::Red),
        and_(size_is(Size::Large), color_is(Color::Blue)),
    );
    print_all(
        "red or (large and blue)",
        &filter.apply(catalog, &red_or_large_blue),
    );

    let not_small = size_is(Size::Small).not();
    print_all("not small", &filter.apply(catalog, &not_small));

    let short_name = |p: &Product| p.name.len() <= 4;
    print_all(
        "green with a short name",
        &filter.apply(catalog, &color_is(Color::Green).and(short_name)),
    );
}

/// Builds a criterion tree from command-line choices
fn runtime_query(catalog: &[Product], args: &[String]) -> Result<(), ParseAttributeError> {
    println!("--- Runtime Query ---\n");

    let mut parts: Vec<Criterion<Product>> = Vec::new();
    if let Some(color) = args.first() {
        parts.push(Criterion::leaf(color_is(color.parse::<Color>()?)));
    }
    if let Some(size) = args.get(1) {
        parts.push(Criterion::leaf(size_is(size.parse::<Size>()?)));
    }

    let query = Criterion::all(parts);
    println!("query: {:?} ({} tests)\n", query, query.leaf_count());
    print_all("matches", &Filter::new().apply(catalog, &query));
    Ok(())
}
