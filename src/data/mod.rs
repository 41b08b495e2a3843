/// Data layer: core types, loading, type sniffing, filtering and writing.
///
/// Architecture:
/// ```text
///      input.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  column → Numeric | Date | Categorical
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  criteria fold + stable sort → new Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Table → output.csv
///   └──────────┘
/// ```

pub mod classify;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
