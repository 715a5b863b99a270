//! Structured memory extraction from chat history.
//!
//! `MemoryExtractor` turns an ordered sequence of raw chat lines into
//! a [`MemoryRecord`] (preferences, emotional patterns, facts) via a
//! single completion call with a JSON-shaped reply. Extraction
//! degrades to a neutral record on failure; callers that need to tell
//! a degraded record from a truly empty one use `try_extract`.

pub use extract::{EXTRACTION_TEMPERATURE, MemoryExtractor, parse_record};
pub use record::{EXTRACTION_FAILED, MemoryRecord, NO_MEMORY, NO_PATTERNS, format_memory_summary};

mod extract;
pub mod prompt;
mod record;
