//! Case-insensitive substring search over the catalog.
//!
//! Results come out in traversal order: topic title, then per subtopic its
//! title, its body text and each interview question. There is no scoring and
//! nothing is cached; callers re-run `search` whenever the query changes.

use serde::Serialize;

use crate::content::Topic;

/// Maximum number of results returned for one query.
pub const MAX_RESULTS: usize = 20;

/// Characters of context kept on each side of a body match.
const EXCERPT_CONTEXT: usize = 30;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Topic,
    Subtopic,
    Content,
    Interview,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchKind::Topic => "topic",
            MatchKind::Subtopic => "subtopic",
            MatchKind::Content => "content",
            MatchKind::Interview => "interview",
        };
        f.write_str(label)
    }
}

/// One place where the query was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopic_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_title: Option<String>,
    pub match_excerpt: String,
}

/// Search topic titles, subtopic titles, subtopic bodies and interview
/// questions for `query`.
///
/// A blank query yields no results.
pub fn search(topics: &[Topic], query: &str) -> Vec<SearchResult> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for topic in topics {
        if fold(&topic.title).contains(&needle) {
            results.push(SearchResult {
                kind: MatchKind::Topic,
                topic_id: topic.id.clone(),
                subtopic_id: None,
                title: topic.title.clone(),
                parent_title: None,
                match_excerpt: topic.title.clone(),
            });
        }

        for subtopic in &topic.subtopics {
            let located = |kind: MatchKind, title: String, excerpt: String| SearchResult {
                kind,
                topic_id: topic.id.clone(),
                subtopic_id: Some(subtopic.id.clone()),
                title,
                parent_title: Some(topic.title.clone()),
                match_excerpt: excerpt,
            };

            if fold(&subtopic.title).contains(&needle) {
                results.push(located(
                    MatchKind::Subtopic,
                    subtopic.title.clone(),
                    subtopic.title.clone(),
                ));
            }

            if let Some(window) = subtopic.body().and_then(|body| excerpt(body, &needle)) {
                results.push(located(MatchKind::Content, subtopic.title.clone(), window));
            }

            for qa in &subtopic.interview_questions {
                if fold(&qa.question).contains(&needle) {
                    results.push(located(
                        MatchKind::Interview,
                        format!("Q: {}", qa.question),
                        qa.question.clone(),
                    ));
                }
            }
        }
    }

    results.truncate(MAX_RESULTS);
    results
}

/// Lowercase character by character so that offsets in the folded text can
/// be mapped back onto the original.
fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Build a window of `EXCERPT_CONTEXT` characters either side of the first
/// match of `needle` (already folded) in `text`. Returns `None` when there
/// is no match.
fn excerpt(text: &str, needle: &str) -> Option<String> {
    let (start, end) = locate(text, needle)?;
    let chars: Vec<char> = text.chars().collect();

    let from = start.saturating_sub(EXCERPT_CONTEXT);
    let to = (end + EXCERPT_CONTEXT).min(chars.len());

    let mut out = String::new();
    if from > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(&chars[from..to]);
    if to < chars.len() {
        out.push_str(ELLIPSIS);
    }
    Some(out)
}

/// Character range `[start, end)` in `text` covered by the first match of
/// the folded `needle`.
fn locate(text: &str, needle: &str) -> Option<(usize, usize)> {
    let mut folded = String::with_capacity(text.len());
    // (byte offset in folded, char index in text) per folded char
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());

    for (index, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            origin.push((folded.len(), index));
            folded.push(lower);
        }
    }

    let match_start = folded.find(needle)?;
    let match_end = match_start + needle.len();

    let first = origin.partition_point(|(offset, _)| *offset < match_start);
    let last = origin.partition_point(|(offset, _)| *offset < match_end);

    let start = origin.get(first)?.1;
    let end = origin.get(last.checked_sub(1)?)?.1 + 1;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Difficulty, InterviewQuestion, Subtopic};

    fn question(text: &str) -> InterviewQuestion {
        InterviewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            tip: None,
            difficulty: Difficulty::Easy,
        }
    }

    fn css_topic() -> Topic {
        Topic {
            id: "css3".to_string(),
            title: "CSS3".to_string(),
            icon: None,
            description: None,
            subtopics: vec![Subtopic {
                id: "flexbox".to_string(),
                title: "Flexbox".to_string(),
                interview_questions: vec![question("How do you center a div?")],
                ..Default::default()
            }],
            categories: Vec::new(),
        }
    }

    fn topic_with_body(body: &str) -> Topic {
        let mut topic = css_topic();
        topic.subtopics[0].definition = Some(body.to_string());
        topic
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let topics = vec![css_topic()];
        assert!(search(&topics, "").is_empty());
        assert!(search(&topics, "   ").is_empty());
        assert!(search(&topics, "\t\n").is_empty());
    }

    #[test]
    fn test_subtopic_title_match() {
        let results = search(&[css_topic()], "flex");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Subtopic);
        assert_eq!(results[0].title, "Flexbox");
        assert_eq!(results[0].topic_id, "css3");
        assert_eq!(results[0].subtopic_id.as_deref(), Some("flexbox"));
        assert_eq!(results[0].parent_title.as_deref(), Some("CSS3"));
    }

    #[test]
    fn test_interview_question_match() {
        let results = search(&[css_topic()], "center");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Interview);
        assert_eq!(results[0].title, "Q: How do you center a div?");
        assert_eq!(results[0].match_excerpt, "How do you center a div?");
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let results = search(&[css_topic()], "  CsS  ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Topic);
        assert!(results[0].subtopic_id.is_none());
    }

    #[test]
    fn test_traversal_order_and_no_dedup() {
        let topic = topic_with_body("Flexbox lays out items along one axis.");
        let results = search(&[topic], "flexbox");
        let kinds: Vec<MatchKind> = results.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![MatchKind::Subtopic, MatchKind::Content]);
    }

    #[test]
    fn test_topic_without_subtopics_only_matches_title() {
        let topic = Topic {
            id: "git".to_string(),
            title: "Git".to_string(),
            icon: None,
            description: Some("git branching".to_string()),
            subtopics: Vec::new(),
            categories: Vec::new(),
        };
        let results = search(&[topic], "git");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Topic);
    }

    #[test]
    fn test_short_body_excerpt_has_no_ellipsis() {
        let topic = topic_with_body("One axis layout.");
        let results = search(&[topic], "axis");
        assert_eq!(results[0].kind, MatchKind::Content);
        assert_eq!(results[0].match_excerpt, "One axis layout.");
    }

    #[test]
    fn test_long_body_excerpt_window() {
        let body = format!("{}needle{}", "a".repeat(50), "b".repeat(50));
        let results = search(&[topic_with_body(&body)], "NEEDLE");
        let expected = format!("...{}needle{}...", "a".repeat(30), "b".repeat(30));
        assert_eq!(results[0].match_excerpt, expected);
    }

    #[test]
    fn test_excerpt_truncated_on_one_side_only() {
        let body = format!("needle{}", "b".repeat(50));
        let results = search(&[topic_with_body(&body)], "needle");
        assert_eq!(
            results[0].match_excerpt,
            format!("needle{}...", "b".repeat(30))
        );
    }

    #[test]
    fn test_excerpt_handles_multibyte_text() {
        let body = format!("{}Größe{}", "é".repeat(40), "ü".repeat(40));
        let results = search(&[topic_with_body(&body)], "GRÖßE");
        let content = results
            .iter()
            .find(|r| r.kind == MatchKind::Content)
            .unwrap();
        assert!(content.match_excerpt.contains("Größe"));
        assert!(content.match_excerpt.starts_with("..."));
        assert!(content.match_excerpt.ends_with("..."));
    }

    #[test]
    fn test_results_capped_at_twenty() {
        let mut topic = css_topic();
        topic.subtopics[0].interview_questions =
            (0..30).map(|i| question(&format!("flex question {}", i))).collect();

        let results = search(&[topic], "flex");
        assert_eq!(results.len(), MAX_RESULTS);
        // Subtopic title first, then questions in authored order.
        assert_eq!(results[0].kind, MatchKind::Subtopic);
        assert_eq!(results[1].match_excerpt, "flex question 0");
        assert_eq!(results[19].match_excerpt, "flex question 18");
    }

    #[test]
    fn test_every_result_contains_query() {
        let catalog = crate::content::Catalog::bundled().unwrap();
        for query in ["react", "JWT", "index", "a"] {
            let results = search(catalog.topics(), query);
            assert!(results.len() <= MAX_RESULTS);
            let needle = query.to_lowercase();
            for result in &results {
                assert!(
                    result.match_excerpt.to_lowercase().contains(&needle),
                    "{:?} does not contain {}",
                    result,
                    query
                );
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let catalog = crate::content::Catalog::bundled().unwrap();
        let first = search(catalog.topics(), "state");
        let second = search(catalog.topics(), "state");
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_with_type_tag() {
        let results = search(&[css_topic()], "center");
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["type"], "interview");
        assert_eq!(json["topicId"], "css3");
        assert_eq!(json["subtopicId"], "flexbox");
        assert_eq!(json["matchExcerpt"], "How do you center a div?");
    }
}
