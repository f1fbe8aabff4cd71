//! Shared test fixtures for Vouch crates.
//!
//! This crate provides data types for testing verification end to end.
//! It depends only on `vouch-core`, so `vouch` can use it as a
//! dev-dependency without a cycle.
//!
//! - [`shapes`] - A small type hierarchy for type-membership checks
//! - [`stack`] - A value type with identity-sensitive accessors
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! vouch-test = { workspace = true }
//! ```

pub mod shapes;
pub mod stack;

pub use shapes::{Circle, Shape, Square, Tag};
pub use stack::Stack;
