//! Response composition.
//!
//! The crisis path returns a fixed safety message; the supportive path
//! composes the instruction handed to the text generator.

mod crisis;
mod prompt;
mod resources;

pub use crisis::{crisis_message, has_localized_template};
pub use prompt::support_prompt;
pub use resources::{Helpline, SupportResources, CURATED};
