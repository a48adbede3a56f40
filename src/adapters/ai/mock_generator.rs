//! Mock text generator for testing.
//!
//! Configurable implementation of the TextGenerator port, allowing tests
//! (and offline development) to run without calling a real provider.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_response("You're not alone in this.");
//!
//! let reply = generator.generate("instruction").await?;
//! assert_eq!(reply, "You're not alone in this.");
//! assert_eq!(generator.call_count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{GenerationError, TextGenerator};

/// Reply returned when no responses are queued.
const DEFAULT_REPLY: &str = "You're doing better than you think. I'm here with you.";

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Success(String),
    /// Return this error.
    Error(GenerationError),
}

/// Mock text generator.
///
/// Queued replies are consumed in order; an empty queue yields a fixed
/// default reply. Every prompt is recorded for verification.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    /// Creates a mock with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
        self
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Success(content)) => Ok(content),
            Some(MockReply::Error(error)) => Err(error),
            None => Ok(DEFAULT_REPLY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let generator = MockTextGenerator::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(generator.generate("a").await.unwrap(), "first");
        assert_eq!(generator.generate("b").await.unwrap(), "second");
    }

    #[tokio::test]
    async fn empty_queue_yields_default_reply() {
        let generator = MockTextGenerator::new();
        assert_eq!(generator.generate("a").await.unwrap(), DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn queued_errors_are_returned() {
        let generator =
            MockTextGenerator::new().with_error(GenerationError::unavailable("down"));

        assert!(matches!(
            generator.generate("a").await,
            Err(GenerationError::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn records_prompts_for_verification() {
        let generator = MockTextGenerator::new();
        generator.generate("one").await.unwrap();
        generator.generate("two").await.unwrap();

        assert_eq!(generator.call_count(), 2);
        assert_eq!(generator.prompts(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let generator = MockTextGenerator::new().with_response("hi");
        let clone = generator.clone();

        clone.generate("a").await.unwrap();
        assert_eq!(generator.call_count(), 1);
    }
}
