//! Plain-text views of catalog content and progress.

use std::fmt::Write;

use crate::content::{ExampleOutput, Subtopic, Topic};
use crate::progress::{CompletionMap, Progress};
use crate::search::SearchResult;

const PLACEHOLDER: &str = "(not covered yet)";
const BAR_WIDTH: usize = 20;

/// `[#####---------------]  25%`
pub fn progress_bar(progress: &Progress) -> String {
    let filled = (progress.percent.min(100) as usize * BAR_WIDTH) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent
    )
}

/// Topic list for the `topics` command.
pub fn topic_list(topics: &[Topic], completed: &CompletionMap, progress: &Progress) -> String {
    let mut out = String::new();
    for topic in topics {
        let mark = if completed.is_set(&topic.id) { "✓" } else { " " };
        let _ = writeln!(out, "  [{}] {:<14} {}", mark, topic.id, topic.display_title());
    }
    let _ = writeln!(
        out,
        "\nYour progress: {} ({} of {} topics)",
        progress_bar(progress),
        progress.completed,
        progress.total
    );
    out
}

/// Topic header plus its subtopics in tab order.
pub fn topic_overview(topic: &Topic, is_complete: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", topic.display_title());
    if let Some(description) = &topic.description {
        let _ = writeln!(out, "{}", description);
    }
    if is_complete {
        let _ = writeln!(out, "✓ Completed");
    }

    if topic.subtopics.is_empty() {
        let _ = writeln!(out, "\n{}", PLACEHOLDER);
        return out;
    }

    let _ = writeln!(out, "\nSubtopics:");
    for subtopic in &topic.subtopics {
        let _ = write!(out, "  {:<20} {}", subtopic.id, subtopic.title);
        if !subtopic.tags.is_empty() {
            let _ = write!(out, "  [{}]", subtopic.tags.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Every section of a subtopic, with placeholders for missing ones.
pub fn subtopic_detail(topic: &Topic, subtopic: &Subtopic) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} › {}", topic.title, subtopic.title);

    section(&mut out, "Definition", subtopic.definition.as_deref());
    section(&mut out, "Why it exists", subtopic.why_it_exists.as_deref());
    section(&mut out, "How it works", subtopic.how_it_works.as_deref());
    bullets(&mut out, "Key points", &subtopic.key_points);
    bullets(&mut out, "When to use", &subtopic.when_to_use);

    heading(&mut out, "Code examples");
    if subtopic.code_examples.is_empty() {
        let _ = writeln!(out, "{}", PLACEHOLDER);
    }
    for example in &subtopic.code_examples {
        let title = example.title.as_deref().unwrap_or("Example");
        match &example.level {
            Some(level) => {
                let _ = writeln!(out, "-- {} ({}, {}) --", title, level, example.language);
            }
            None => {
                let _ = writeln!(out, "-- {} ({}) --", title, example.language);
            }
        }
        let _ = writeln!(out, "{}", example.code.trim_end());
    }

    heading(&mut out, "Output");
    match &subtopic.output {
        None => {
            let _ = writeln!(out, "{}", PLACEHOLDER);
        }
        Some(output) => output_lines(&mut out, output),
    }

    heading(&mut out, "Common mistakes");
    if subtopic.common_mistakes.is_empty() {
        let _ = writeln!(out, "{}", PLACEHOLDER);
    }
    for m in &subtopic.common_mistakes {
        let _ = writeln!(out, "✗ {}", m.mistake);
        let _ = writeln!(out, "  Why: {}", m.why);
        let _ = writeln!(out, "  Instead: {}", m.correct);
    }

    heading(&mut out, "Interview questions");
    if subtopic.interview_questions.is_empty() {
        let _ = writeln!(out, "{}", PLACEHOLDER);
    }
    for (i, qa) in subtopic.interview_questions.iter().enumerate() {
        let _ = writeln!(out, "Q{}. {} [{}]", i + 1, qa.question, qa.difficulty);
        let _ = writeln!(out, "    {}", qa.answer);
        if let Some(tip) = &qa.tip {
            let _ = writeln!(out, "    Tip: {}", tip);
        }
    }
    out
}

fn output_lines(out: &mut String, output: &ExampleOutput) {
    for text in [
        &output.description,
        &output.result,
        &output.visual,
        &output.ui,
    ]
    .into_iter()
    .flatten()
    {
        let _ = writeln!(out, "{}", text.trim_end());
    }
    if let Some(json) = &output.json {
        let pretty = serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string());
        let _ = writeln!(out, "{}", pretty);
    }
}

/// Checklist categories with check marks and a progress footer.
pub fn checklist(topic: &Topic, state: &CompletionMap, progress: &Progress) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", topic.display_title());
    if let Some(description) = &topic.description {
        let _ = writeln!(out, "{}", description);
    }
    for category in &topic.categories {
        let _ = writeln!(out, "\n{}", category.title);
        for item in &category.items {
            let mark = if state.is_set(&item.id) { "x" } else { " " };
            let _ = writeln!(out, "  [{}] {:<5} {}", mark, item.id, item.text);
        }
    }
    let _ = writeln!(
        out,
        "\n{} / {} completed {}",
        progress.completed,
        progress.total,
        progress_bar(progress)
    );
    out
}

/// One line per search hit, with the location to pass to `show`.
pub fn search_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for result in results {
        let location = match &result.subtopic_id {
            Some(sub) => format!("{} {}", result.topic_id, sub),
            None => result.topic_id.clone(),
        };
        let _ = writeln!(out, "{:<9} {:<28} {}", result.kind, location, result.title);
        if result.match_excerpt != result.title {
            let _ = writeln!(out, "          {}", result.match_excerpt);
        }
    }
    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n## {}", title);
}

fn section(out: &mut String, title: &str, body: Option<&str>) {
    heading(out, title);
    let _ = writeln!(out, "{}", body.unwrap_or(PLACEHOLDER));
}

fn bullets(out: &mut String, title: &str, items: &[String]) {
    heading(out, title);
    if items.is_empty() {
        let _ = writeln!(out, "{}", PLACEHOLDER);
    }
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}
