//! Catalog record types.
//!
//! Field names follow the camelCase layout of the catalog JSON. Every study
//! field of a subtopic is optional; renderers print a placeholder where a
//! section is missing.

use serde::{Deserialize, Serialize};

/// One subject area in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tab order matters, keep as authored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtopics: Vec<Subtopic>,
    /// Only the revision checklist carries categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<ChecklistCategory>,
}

impl Topic {
    pub fn is_checklist(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn subtopic(&self, subtopic_id: &str) -> Option<&Subtopic> {
        self.subtopics.iter().find(|s| s.id == subtopic_id)
    }

    /// Title with the icon prefixed when one is set.
    pub fn display_title(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.title),
            None => self.title.clone(),
        }
    }
}

/// A learning unit inside a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_it_exists: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_it_works: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when_to_use: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_examples: Vec<CodeExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_mistakes: Vec<CommonMistake>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interview_questions: Vec<InterviewQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<ExampleOutput>,
}

impl Subtopic {
    /// The free-text field that search treats as the subtopic body.
    pub fn body(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

/// Audience of a code example. Authors may use their own labels, which are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeLevel {
    Beginner,
    Intermediate,
    Advanced,
    Project,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for CodeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CodeLevel::Beginner => "Beginner",
            CodeLevel::Intermediate => "Intermediate",
            CodeLevel::Advanced => "Advanced",
            CodeLevel::Project => "Project",
            CodeLevel::Other(label) => label.as_str(),
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub code: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CodeLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonMistake {
    pub mistake: String,
    pub why: String,
    pub correct: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub difficulty: Difficulty,
}

/// What running an example produces: plain text, an ASCII visual, a JSON
/// payload or a rendered UI description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
}
