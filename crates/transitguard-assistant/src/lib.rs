//! Trait-based responder seam and the scripted chat assistant service.

mod responder;
mod service;

pub use responder::{Responder, ScriptedResponder};
pub use service::{
    Assistant, CONNECTIVITY_FALLBACK, DEFAULT_FALLBACK, SUGGESTED_QUESTIONS, WELCOME_MESSAGE,
};
