/// Data layer: record model, flat-file loading, and queries.
///
/// Architecture:
/// ```text
///  roster file (first|last|house|head_of_house|cohort)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → CohortDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CohortDataset │  Vec<Record>, file order
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  linear scans → sets / sorted rosters
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
