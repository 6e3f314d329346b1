//! Balanced grid dashboards.
//!
//! This crate re-exports [`dashboard`], which holds the layout engine,
//! the container and the item/adapter plumbing.

pub use dashboard::*;
