/// Data layer: core types, loading, reshaping and filtering.
///
/// Architecture:
/// ```text
///   gdp_pcap.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WideTable (raw cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  reshape  │  melt + coerce + sort → LongTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range, then countries → matching records
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod reshape;
pub mod filter;
