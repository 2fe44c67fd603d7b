//! Scripted knowledge base: fixed, insertion-ordered trigger -> response table.
//!
//! ## Knowledge Base Topics
//!
//! Entries are grouped into 8 topics, kept in the original curation order:
//!
//! | Topic | Purpose                                              |
//! |-------|------------------------------------------------------|
//! | 1     | RealTimeRisk: current stop/route risk awareness      |
//! | 2     | HistoricalPatterns: past crime volumes and peaks     |
//! | 3     | LocationSpecific: ward, route, and area breakdowns   |
//! | 4     | Environmental: traffic, 311, lighting context        |
//! | 5     | Predictive: model forecasts and risk windows         |
//! | 6     | AlertsProtocols: reporting and alert workflows       |
//! | 7     | EquityAccessibility: underserved-area analysis       |
//! | 8     | QuickFacts: dashboard headline numbers               |
//!
//! The table is built once at startup and never mutated; entry order is load
//! bearing because the matcher resolves ties by first match.

mod base;

pub use base::{KnowledgeBase, KnowledgeEntry};

use serde::{Deserialize, Serialize};

/// Human-readable names for the 8 knowledge topics, in curation order.
pub const TOPIC_LABELS: [&str; 8] = [
    "Real-Time Risk Awareness",
    "Historical Crime & Patterns",
    "Location-Specific Information",
    "Environmental & Traffic Context",
    "Predictive & Forecast-Based",
    "Alerts and Safety Protocols",
    "Equity and Accessibility",
    "Quick Facts",
];

/// Topic enum for type-safe references to the 8 knowledge categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Topic 1: current stop/route risk awareness.
    RealTimeRisk = 1,
    /// Topic 2: past crime volumes, peak days and months.
    HistoricalPatterns = 2,
    /// Topic 3: ward, route, and community-area breakdowns.
    LocationSpecific = 3,
    /// Topic 4: traffic crashes, 311 reports, street lighting.
    Environmental = 4,
    /// Topic 5: model forecasts and upcoming risk windows.
    Predictive = 5,
    /// Topic 6: incident reporting and alert workflows.
    AlertsProtocols = 6,
    /// Topic 7: underserved-area and per-rider analysis.
    EquityAccessibility = 7,
    /// Topic 8: headline numbers surfaced on the dashboard.
    QuickFacts = 8,
}

impl Topic {
    /// Returns the topic index (1-8).
    #[inline]
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns the human-readable label for this topic.
    #[inline]
    pub fn label(&self) -> &'static str {
        TOPIC_LABELS[self.index() as usize - 1]
    }

    /// Creates a Topic from an index (1-8). Returns None if out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::RealTimeRisk),
            2 => Some(Self::HistoricalPatterns),
            3 => Some(Self::LocationSpecific),
            4 => Some(Self::Environmental),
            5 => Some(Self::Predictive),
            6 => Some(Self::AlertsProtocols),
            7 => Some(Self::EquityAccessibility),
            8 => Some(Self::QuickFacts),
            _ => None,
        }
    }

    /// Returns all topics in curation order.
    pub fn all() -> [Self; 8] {
        [
            Self::RealTimeRisk,
            Self::HistoricalPatterns,
            Self::LocationSpecific,
            Self::Environmental,
            Self::Predictive,
            Self::AlertsProtocols,
            Self::EquityAccessibility,
            Self::QuickFacts,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_index_roundtrip() {
        for topic in Topic::all() {
            assert_eq!(Topic::from_index(topic.index()), Some(topic));
        }
        assert_eq!(Topic::from_index(0), None);
        assert_eq!(Topic::from_index(9), None);
    }

    #[test]
    fn test_topic_labels_line_up() {
        assert_eq!(Topic::RealTimeRisk.label(), "Real-Time Risk Awareness");
        assert_eq!(Topic::QuickFacts.label(), "Quick Facts");
    }
}
