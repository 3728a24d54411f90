//! # Explanation Provider
//!
//! The provider is abstracted behind a trait so the interaction loop can be
//! tested with scripted doubles and so another backend could be plugged in
//! without touching the core.
//!
//! [`gemini::GeminiClient`] is the production implementation: a blocking
//! HTTP client against the Google generative-language API.

use crate::error::Result;

pub mod gemini;

pub trait ExplanationProvider {
    /// Fetch a markdown explanation for a (lowercased) word. Each call is an
    /// independent request; there is no caching.
    fn explain(&self, word: &str) -> Result<String>;

    /// Cheap connectivity self-test. `Ok(false)` means the service answered
    /// with a failure or could not be reached; `Err` is reserved for local
    /// setup problems.
    fn test_connection(&self) -> Result<bool>;
}
