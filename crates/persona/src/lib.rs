//! Personality-styled response transformation.
//!
//! A fixed catalog of personality styles and an engine that produces
//! a neutral baseline answer and rewrites it in a selected style,
//! optionally personalized with extracted memory. Both operations are
//! stateless request/response transformers over a completion provider.

pub use catalog::{Profile, Style};
pub use engine::{PersonalityEngine, STANDARD_TEMPERATURE, TRANSFORM_TEMPERATURE, Transformation};

mod catalog;
mod engine;
pub mod prompt;
