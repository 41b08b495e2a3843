//! Interactive CSV filter/sort utility.
//!
//! The pipeline is usable without a terminal:
//! [`data::loader::load_table`] → [`data::classify::classify_column`] →
//! [`data::filter::filter_and_sort`] → [`data::writer::write_table`].
//! [`app::run`] wires the same steps to a [`console::prompt::Console`].

pub mod app;
pub mod console;
pub mod data;
pub mod state;
