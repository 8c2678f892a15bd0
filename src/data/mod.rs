/// Data layer: core types, loading, filtering, and view projection.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TweetDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ TweetDataset │  Vec<TweetRecord>, month + range indices
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month + score predicates → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  versioned FilteredView → plot points / raw text
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
