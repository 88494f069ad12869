//! Loading and validating the topic catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::{ChecklistItem, Subtopic, Topic};

/// Catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("topic #{index} has an empty id")]
    EmptyTopicId { index: usize },

    #[error("duplicate topic id '{0}'")]
    DuplicateTopic(String),

    #[error("topic '{topic}' has a subtopic with an empty id")]
    EmptySubtopicId { topic: String },

    #[error("topic '{topic}' has duplicate subtopic id '{subtopic}'")]
    DuplicateSubtopic { topic: String, subtopic: String },

    #[error("checklist category '{category}' has an item with an empty id")]
    EmptyItemId { category: String },

    #[error("duplicate checklist item id '{0}'")]
    DuplicateItem(String),
}

/// The read-only topic tree every command works against.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Build a catalog from already-parsed topics, validating ids.
    pub fn new(topics: Vec<Topic>) -> Result<Self, ContentError> {
        validate(&topics)?;
        Ok(Self { topics })
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let topics: Vec<Topic> = serde_json::from_str(raw)?;
        Self::new(topics)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        debug!(
            "Loaded {} topics from {}",
            catalog.topics.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All topics in authored order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Resolve a `show <topic> <subtopic>` location.
    pub fn subtopic(&self, topic_id: &str, subtopic_id: &str) -> Option<&Subtopic> {
        self.topic(topic_id)?.subtopic(subtopic_id)
    }

    /// The revision checklist topic, if the catalog has one.
    pub fn checklist(&self) -> Option<&Topic> {
        self.topics.iter().find(|t| t.is_checklist())
    }

    pub fn checklist_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.checklist()
            .into_iter()
            .flat_map(|t| t.categories.iter())
            .flat_map(|c| c.items.iter())
    }
}

fn validate(topics: &[Topic]) -> Result<(), ContentError> {
    let mut topic_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for (index, topic) in topics.iter().enumerate() {
        if topic.id.is_empty() {
            return Err(ContentError::EmptyTopicId { index });
        }
        if !topic_ids.insert(topic.id.as_str()) {
            return Err(ContentError::DuplicateTopic(topic.id.clone()));
        }

        let mut subtopic_ids = HashSet::new();
        for subtopic in &topic.subtopics {
            if subtopic.id.is_empty() {
                return Err(ContentError::EmptySubtopicId {
                    topic: topic.id.clone(),
                });
            }
            if !subtopic_ids.insert(subtopic.id.as_str()) {
                return Err(ContentError::DuplicateSubtopic {
                    topic: topic.id.clone(),
                    subtopic: subtopic.id.clone(),
                });
            }
        }

        // Checklist ids key the completion map, so they are unique catalog-wide.
        for category in &topic.categories {
            for item in &category.items {
                if item.id.is_empty() {
                    return Err(ContentError::EmptyItemId {
                        category: category.title.clone(),
                    });
                }
                if !item_ids.insert(item.id.as_str()) {
                    return Err(ContentError::DuplicateItem(item.id.clone()));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::CodeLevel;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.topics()[0].id, "html5");
        assert_eq!(catalog.topics()[15].id, "checklist");
        assert!(catalog.topic("miniprojects").is_some());
        assert!(catalog.topic("checklist").is_some());
        assert!(catalog.checklist_items().count() > 0);
        assert!(catalog.subtopic("css3", "flexbox").is_some());
    }

    #[test]
    fn test_catalog_accepts_custom_code_level() {
        let raw = r#"[{"id": "miniprojects", "title": "Mini Projects", "subtopics": [
            {"id": "todo-app", "title": "Todo App", "codeExamples": [
                {"code": "app.listen(3000)", "language": "javascript", "level": "Key Code"},
                {"code": "<ul></ul>", "language": "html", "level": "Beginner"}
            ]}
        ]}]"#;
        let catalog = Catalog::from_json(raw).unwrap();
        let examples = &catalog
            .subtopic("miniprojects", "todo-app")
            .unwrap()
            .code_examples;
        assert_eq!(
            examples[0].level,
            Some(CodeLevel::Other("Key Code".to_string()))
        );
        assert_eq!(examples[1].level, Some(CodeLevel::Beginner));
    }

    #[test]
    fn test_bundled_catalog_keeps_custom_code_level() {
        let catalog = Catalog::bundled().unwrap();
        let auth = catalog.subtopic("miniprojects", "auth-app").unwrap();
        assert!(auth
            .code_examples
            .iter()
            .any(|e| e.level == Some(CodeLevel::Other("Key Code".to_string()))));
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let raw = r#"[{"id": "git", "title": "Git"}, {"id": "git", "title": "Git again"}]"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateTopic(id) if id == "git"));
    }

    #[test]
    fn test_duplicate_subtopic_rejected() {
        let raw = r#"[{"id": "css3", "title": "CSS3", "subtopics": [
            {"id": "grid", "title": "Grid"},
            {"id": "grid", "title": "Grid 2"}
        ]}]"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSubtopic { .. }));
    }

    #[test]
    fn test_same_subtopic_id_in_different_topics_allowed() {
        let raw = r#"[
            {"id": "react", "title": "React", "subtopics": [{"id": "basics", "title": "Basics"}]},
            {"id": "nodejs", "title": "Node.js", "subtopics": [{"id": "basics", "title": "Basics"}]}
        ]"#;
        assert!(Catalog::from_json(raw).is_ok());
    }

    #[test]
    fn test_duplicate_checklist_item_rejected() {
        let raw = r#"[{"id": "checklist", "title": "Checklist", "categories": [
            {"title": "A", "items": [{"id": "c1", "text": "one"}]},
            {"title": "B", "items": [{"id": "c1", "text": "two"}]}
        ]}]"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateItem(id) if id == "c1"));
    }

    #[test]
    fn test_empty_topic_id_rejected() {
        let raw = r#"[{"id": "", "title": "Nameless"}]"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, ContentError::EmptyTopicId { index: 0 }));
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(&path, r#"[{"id": "git", "title": "Git"}]"#).unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.checklist().is_none());
        assert_eq!(catalog.checklist_items().count(), 0);

        let missing = Catalog::from_path(&tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ContentError::Read { .. }));
    }
}
