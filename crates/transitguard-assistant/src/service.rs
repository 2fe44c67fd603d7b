//! Assistant service: wraps the matcher with simulated latency and fallback
//! messaging so the chat UI always gets a renderable reply.
//!
//! Failure policy: errors from an upstream responder are never propagated.
//! They are logged, converted into the scripted answer when one exists, and
//! into the connectivity fallback otherwise. Either way the reply is still
//! reported as `success` at the transport level.

use crate::responder::{Responder, ScriptedResponder};
use std::sync::Arc;
use std::time::Duration;
use transitguard_core::{AssistantConfig, ChatResponse, QueryMatcher};

/// Generic reply when no scripted entry qualifies.
pub const DEFAULT_FALLBACK: &str = "Thank you for your question about Chicago Transit safety. For the most accurate and up-to-date information, I recommend checking the official CTA website or contacting their customer service. You can also ask me about specific safety topics, crime statistics, or station information.";

/// Degraded reply after an upstream failure with no scripted answer either.
pub const CONNECTIVITY_FALLBACK: &str = "I'm currently experiencing connectivity issues. Please try again later or contact CTA customer service for immediate assistance.";

/// Greeting shown when a chat session opens.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Chicago Transit Safety Assistant. How can I help you today? You can ask me about transit safety, crime statistics, station information, or safety alerts.";

/// Prompts offered as one-tap suggestions in the chat UI.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What are the stations near me?",
    "What are the total number of crimes today?",
    "What are the total number of traffic accidents today?",
    "What is the safest line in the last 7 days?",
];

/// The chat service. Holds the built-in scripted responder, an optional
/// upstream responder (a future live API), and the configured reply delay.
pub struct Assistant {
    scripted: ScriptedResponder,
    upstream: Option<Arc<dyn Responder>>,
    delay: Duration,
}

impl Assistant {
    /// Assistant over the built-in knowledge base with `config`'s delay.
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_matcher(QueryMatcher::builtin(), config)
    }

    /// Assistant over a specific matcher (e.g. a test table).
    pub fn with_matcher(matcher: QueryMatcher, config: &AssistantConfig) -> Self {
        Self {
            scripted: ScriptedResponder::new(matcher),
            upstream: None,
            delay: Duration::from_millis(config.response_delay_ms),
        }
    }

    /// Routes messages through `upstream` first, falling back to the scripted
    /// table when it has no answer or fails.
    pub fn with_upstream(mut self, upstream: Arc<dyn Responder>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Answers one chat message. Always terminates with a renderable reply;
    /// `success` is `true` even on the degraded paths.
    pub async fn respond(&self, message: &str) -> ChatResponse {
        tokio::time::sleep(self.delay).await;

        if let Some(upstream) = &self.upstream {
            match upstream.respond(message).await {
                Ok(Some(answer)) => {
                    tracing::debug!(
                        target: "transitguard::assistant",
                        responder = upstream.name(),
                        "upstream responder answered"
                    );
                    return ChatResponse::ok(answer);
                }
                Ok(None) => {
                    // Upstream had nothing to say; the scripted table decides.
                }
                Err(err) => {
                    tracing::warn!(
                        target: "transitguard::assistant",
                        responder = upstream.name(),
                        error = %err,
                        "upstream responder failed, degrading to scripted reply"
                    );
                    // The degraded path is delayed too, so the UI's
                    // "thinking" indicator stays believable.
                    tokio::time::sleep(self.delay).await;
                    let reply = self
                        .scripted
                        .lookup(message)
                        .unwrap_or_else(|| CONNECTIVITY_FALLBACK.to_string());
                    return ChatResponse::ok(reply);
                }
            }
        }

        match self.scripted.lookup(message) {
            Some(answer) => ChatResponse::ok(answer),
            None => {
                tracing::debug!(
                    target: "transitguard::assistant",
                    "no scripted entry qualified, returning generic fallback"
                );
                ChatResponse::ok(DEFAULT_FALLBACK)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transitguard_core::AssistantConfig;

    fn test_config() -> AssistantConfig {
        AssistantConfig {
            app_name: "Test Assistant".to_string(),
            response_delay_ms: 0,
        }
    }

    struct FailingUpstream;

    #[async_trait::async_trait]
    impl Responder for FailingUpstream {
        fn name(&self) -> &str {
            "FailingUpstream"
        }

        async fn respond(
            &self,
            _message: &str,
        ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
            Err("connection refused".into())
        }
    }

    struct SilentUpstream;

    #[async_trait::async_trait]
    impl Responder for SilentUpstream {
        fn name(&self) -> &str {
            "SilentUpstream"
        }

        async fn respond(
            &self,
            _message: &str,
        ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_scripted_answer_for_known_query() {
        let assistant = Assistant::new(&test_config());
        let reply = assistant.respond("What is the safest line in the last 7 days?").await;
        assert!(reply.success);
        assert_eq!(
            reply.message,
            "The safest line in the last 7 days is Purple and Yellow with 1 incidents."
        );
    }

    #[tokio::test]
    async fn test_gibberish_gets_generic_fallback_and_success() {
        let assistant = Assistant::new(&test_config());
        let reply = assistant.respond("xyz completely unrelated gibberish").await;
        assert!(reply.success);
        assert_eq!(reply.message, DEFAULT_FALLBACK);
    }

    #[tokio::test]
    async fn test_failing_upstream_degrades_to_scripted_answer() {
        let assistant =
            Assistant::new(&test_config()).with_upstream(Arc::new(FailingUpstream));
        let reply = assistant.respond("stations near me").await;
        assert!(reply.success);
        assert_eq!(
            reply.message,
            "The stations nearest to your current location are: Noyes, Foster, Central, and Davis"
        );
    }

    #[tokio::test]
    async fn test_failing_upstream_with_no_scripted_answer_reports_connectivity() {
        let assistant =
            Assistant::new(&test_config()).with_upstream(Arc::new(FailingUpstream));
        let reply = assistant.respond("xyz completely unrelated gibberish").await;
        assert!(reply.success);
        assert_eq!(reply.message, CONNECTIVITY_FALLBACK);
    }

    #[tokio::test]
    async fn test_silent_upstream_falls_through_to_scripted_table() {
        let assistant =
            Assistant::new(&test_config()).with_upstream(Arc::new(SilentUpstream));
        let reply = assistant.respond("total traffic accidents today").await;
        assert_eq!(
            reply.message,
            "The total number of traffic accidents in Chicago today is 365."
        );
    }

    #[tokio::test]
    async fn test_suggested_questions_all_have_scripted_answers() {
        let assistant = Assistant::new(&test_config());
        for question in SUGGESTED_QUESTIONS {
            let reply = assistant.respond(question).await;
            assert!(reply.success);
            assert_ne!(reply.message, DEFAULT_FALLBACK, "no answer for '{question}'");
        }
    }

    #[tokio::test]
    async fn test_reply_serializes_to_two_field_shape() {
        let assistant = Assistant::new(&test_config());
        let reply = assistant.respond("safest route").await;
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["message"].as_str().unwrap().starts_with("Currently, routes"));
    }
}
