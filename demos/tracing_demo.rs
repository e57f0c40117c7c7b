//! Tracing Example
//!
//! Shows the `debug` events `Filter` emits when the `tracing` feature is on.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use criteria::prelude::*;
use criteria::product::{color_is, sample_catalog, size_is, Color, Size};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    let catalog = sample_catalog();
    let filter = Filter::new();

    let green = filter.apply(&catalog, &color_is(Color::Green));
    tracing::info!(count = green.len(), "green products selected");

    let (large, rest) = filter.partition(&catalog, &size_is(Size::Large));
    tracing::info!(large = large.len(), rest = rest.len(), "catalog partitioned");
}
