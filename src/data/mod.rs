/// Data layer: artifact files, loading, and slider inputs.
///
/// Architecture:
/// ```text
///  model .json   metrics .csv   dataset .csv
///        │             │              │
///        ▼             ▼              ▼
///   ┌──────────────────────────────────────┐
///   │  loader      parse files → typed data │
///   └──────────────────────────────────────┘
///                      │
///                      ▼
///   ┌──────────────────────────────────────┐
///   │  artifacts   align dataset to model,  │
///   │              per-column stats         │
///   └──────────────────────────────────────┘
///                      │
///                      ▼
///   ┌──────────────────────────────────────┐
///   │  inputs      median-seeded sliders    │
///   └──────────────────────────────────────┘
/// ```

pub mod artifacts;
pub mod inputs;
pub mod loader;
pub mod model;
