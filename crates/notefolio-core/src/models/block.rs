use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::image::InlineImage;

/// One topic + notes unit of document content.
///
/// Blocks are immutable once appended to a document; the only mutation
/// paths at the document level are append and remove-by-id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentBlock {
    pub id: Uuid,
    pub topic: String,
    pub notes: String,
    /// Inline-encoded images shown under the notes, in insertion order.
    #[serde(default)]
    pub images: Vec<InlineImage>,
    /// Informational only, never used for ordering.
    pub created_at: jiff::Timestamp,
}

impl ContentBlock {
    /// Create a block with a fresh id and the current timestamp.
    ///
    /// `topic` and `notes` must be non-empty after trimming; embedded line
    /// breaks in `notes` are preserved (each is a paragraph boundary at
    /// render time).
    pub fn new(
        topic: impl Into<String>,
        notes: impl Into<String>,
        images: Vec<InlineImage>,
    ) -> Result<Self, CoreError> {
        let topic = topic.into();
        let notes = notes.into();

        if topic.trim().is_empty() {
            return Err(CoreError::EmptyTopic);
        }
        if notes.trim().is_empty() {
            return Err(CoreError::EmptyNotes);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            topic,
            notes,
            images,
            created_at: jiff::Timestamp::now(),
        })
    }

    /// The note body split into paragraphs at embedded line breaks.
    /// Blank lines do not produce empty paragraphs.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.notes
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
