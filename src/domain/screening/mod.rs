//! Emergency-keyword screening.

mod lexicon;
mod screener;

pub use lexicon::{phrases_for, ENGLISH_FALLBACK};
pub use screener::is_emergency;
