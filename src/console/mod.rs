//! Console adapter: turns stdin/stdout interaction into a [`Selection`]
//! and reports results back.
//!
//! [`Selection`]: crate::state::Selection

pub mod collector;
pub mod prompt;
pub mod report;
