//! Effectiveness queries
//!
//! This module turns damage relation sets into weakness and resistance
//! lists, for one type, for two stacked types, or for a creature looked up
//! in a [`TypeChart`](crate::TypeChart).

mod resolve;

pub use resolve::{resolve, resolve_dual, resolve_single};
