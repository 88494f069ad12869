//! The static study catalog: topics, subtopics and the revision checklist.
//!
//! The catalog is read-only at runtime. It is either compiled into the
//! binary or loaded from a JSON file, and validated before use.

mod catalog;
mod types;

pub use catalog::Catalog;
pub use types::{ExampleOutput, Subtopic, Topic};

#[cfg(test)]
pub use types::{Difficulty, InterviewQuestion};
