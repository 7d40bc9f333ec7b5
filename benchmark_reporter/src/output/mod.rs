//!
//! The benchmark report output.
//!

pub mod section;
pub mod table;
