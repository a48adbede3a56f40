//! Text generator adapters.
//!
//! Implementations of the TextGenerator port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Generative Language API (gemini-1.5-flash)
//! - `MockTextGenerator` - Configurable mock for testing

mod gemini_provider;
mod mock_generator;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_generator::{MockReply, MockTextGenerator};
