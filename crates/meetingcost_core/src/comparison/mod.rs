//! Human-relatable cost comparisons.
//!
//! # See also
//! - `catalog` for the reference item list.

pub mod catalog;
pub mod generator;
