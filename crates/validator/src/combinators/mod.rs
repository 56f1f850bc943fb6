//! Adapters that lift scalar validators to other shapes
//!
//! - [`Each`]: validates every element of a list field.

pub mod each;

pub use each::{Each, each};
