use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::block::ContentBlock;

/// The ordered sequence of content blocks making up one document.
///
/// Insertion order is display order. There is no other document-level state:
/// blocks are appended at the end and removed by id, never edited in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Document {
    blocks: Vec<ContentBlock>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block at the end of the sequence.
    pub fn append(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Remove the block with the given id. Returns `false` when no block
    /// carries that id (a no-op, not an error).
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|block| block.id != id);
        self.blocks.len() != before
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Partition blocks into the preview's two columns by index parity:
/// even indices left, odd indices right, relative order preserved.
pub fn split_columns(blocks: &[ContentBlock]) -> (Vec<&ContentBlock>, Vec<&ContentBlock>) {
    let left = blocks.iter().step_by(2).collect();
    let right = blocks.iter().skip(1).step_by(2).collect();
    (left, right)
}
