use serde::{Deserialize, Serialize};

pub mod record;
pub mod summary;

// Re-exports for convenience
pub use record::*;
pub use summary::*;

/// Marker used in place of missing textual fields.
pub const PLACEHOLDER: &str = "—";

// Closed set of supported marketplaces; registry order follows `ALL`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Yiwugo,
    Dhgate,
    #[serde(rename = "mic")]
    MadeInChina,
}

impl SourceId {
    pub const ALL: [SourceId; 3] = [SourceId::Yiwugo, SourceId::Dhgate, SourceId::MadeInChina];

    /// Short identifier used in configuration and diagnostics.
    pub fn key(&self) -> &'static str {
        match self {
            SourceId::Yiwugo => "yiwugo",
            SourceId::Dhgate => "dhgate",
            SourceId::MadeInChina => "mic",
        }
    }

    /// Human-readable platform name shown in tables, summaries and exports.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceId::Yiwugo => "Yiwugo",
            SourceId::Dhgate => "DHgate",
            SourceId::MadeInChina => "Made-in-China",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
