//! Language tags and script-based detection.

mod detector;
mod tag;

pub use detector::detect;
pub use tag::SupportedLanguage;
