//! The seam where a real backend plugs in, plus the built-in scripted impl.

use transitguard_core::QueryMatcher;

/// Trait implemented by anything that can answer a chat message.
///
/// `Ok(None)` means "I have no answer for this" and lets the service fall
/// through to the next layer; errors are reserved for genuine upstream
/// failures (a future live API), which the service swallows into a degraded
/// reply rather than propagating.
#[async_trait::async_trait]
pub trait Responder: Send + Sync {
    /// Unique responder name for logging.
    fn name(&self) -> &str;

    /// Attempts to answer `message`.
    async fn respond(
        &self,
        message: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;
}

const SCRIPTED_NAME: &str = "ScriptedResponder";

/// Built-in responder backed by the two-phase [`QueryMatcher`]. Infallible:
/// it either finds a scripted answer or reports `Ok(None)`.
#[derive(Clone, Default)]
pub struct ScriptedResponder {
    matcher: QueryMatcher,
}

impl ScriptedResponder {
    pub fn new(matcher: QueryMatcher) -> Self {
        Self { matcher }
    }

    /// Synchronous lookup used both by the trait impl and by the service's
    /// degraded path after an upstream failure.
    pub fn lookup(&self, message: &str) -> Option<String> {
        self.matcher.best_match(message).response().map(str::to_string)
    }
}

#[async_trait::async_trait]
impl Responder for ScriptedResponder {
    fn name(&self) -> &str {
        SCRIPTED_NAME
    }

    async fn respond(
        &self,
        message: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.lookup(message))
    }
}
