//! Batch prompt construction and answer reconciliation.
//!
//! One request carries every topic; the model is told to separate its
//! answers with [`ANSWER_DELIMITER`]. Pairing the answers back to the
//! topics is strictly index-based — no semantic matching is attempted, and
//! the duplication/truncation/placeholder fallbacks below are deliberate
//! degraded-but-deterministic behavior when the model does not cooperate.

use notefolio_core::error::CoreError;
use notefolio_core::models::block::ContentBlock;

/// Separator the model is instructed to put between answers.
pub const ANSWER_DELIMITER: &str = "|||";

/// Notes used for a topic the model returned no answer for.
pub const MISSING_ANSWER_PLACEHOLDER: &str = "(No answer returned)";

/// Split free-form input into ordered topics: one per line, trimmed,
/// blank lines ignored.
pub fn parse_topics(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the batch prompt for a list of topics.
pub fn batch_prompt(topics: &[String]) -> String {
    let mut prompt = String::from(
        "Write concise study notes for each of the following topics. \
         Answer each topic on its own, in the order given. \
         Separate the answers with the exact delimiter ",
    );
    prompt.push_str(ANSWER_DELIMITER);
    prompt.push_str(" and use no other formatting, numbering, or headings.\n\n");

    for (i, topic) in topics.iter().enumerate() {
        prompt.push_str(&format!("{}. {topic}\n", i + 1));
    }

    prompt
}

/// Split a delimiter-separated batch response into answer segments.
///
/// Each segment is trimmed and has a leading enumeration prefix (digits,
/// optional period, optional whitespace) stripped. Segments left empty
/// are dropped.
pub fn split_answers(text: &str) -> Vec<String> {
    text.split(ANSWER_DELIMITER)
        .map(str::trim)
        .map(strip_enumeration_prefix)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_enumeration_prefix(segment: &str) -> &str {
    let rest = segment.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == segment.len() {
        return segment;
    }
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.trim_start()
}

/// Pair topics with answer segments by index.
///
/// - exactly one answer for several topics: duplicate it across all of them;
/// - more answers than topics: extras are truncated;
/// - fewer answers than topics: missing slots get the placeholder.
pub fn reconcile(topics: &[String], answers: &[String]) -> Vec<String> {
    if answers.len() == 1 && topics.len() > 1 {
        return vec![answers[0].clone(); topics.len()];
    }

    topics
        .iter()
        .enumerate()
        .map(|(i, _)| {
            answers
                .get(i)
                .cloned()
                .unwrap_or_else(|| MISSING_ANSWER_PLACEHOLDER.to_string())
        })
        .collect()
}

/// Turn reconciled topic/answer pairs into content blocks, no images.
pub fn blocks_from_answers(
    topics: &[String],
    answers: &[String],
) -> Result<Vec<ContentBlock>, CoreError> {
    topics
        .iter()
        .zip(answers)
        .map(|(topic, notes)| ContentBlock::new(topic.clone(), notes.clone(), Vec::new()))
        .collect()
}
