//! transitguard-core: safety-assistant core library (shared types, knowledge base, query matcher).
//!
//! Re-exports the knowledge base and matcher so the assistant service layer and
//! any future front ends keep a consistent public API.

mod knowledge;
mod matcher;
mod shared;

// Shared types and configuration
pub use shared::{AssistantConfig, ChatResponse, DEFAULT_RESPONSE_DELAY_MS};

// Knowledge base (scripted trigger -> response table)
pub use knowledge::{KnowledgeBase, KnowledgeEntry, Topic, TOPIC_LABELS};

// Query matcher
pub use matcher::{MatchPhase, MatchResult, QueryMatcher, KEYWORD_OVERLAP_THRESHOLD};
