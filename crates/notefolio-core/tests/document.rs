use notefolio_core::models::block::ContentBlock;
use notefolio_core::models::document::{split_columns, Document};
use uuid::Uuid;

fn block(topic: &str) -> ContentBlock {
    ContentBlock::new(topic, "some notes", Vec::new()).unwrap()
}

#[test]
fn append_preserves_order() {
    let mut doc = Document::new();
    for topic in ["a", "b", "c"] {
        doc.append(block(topic));
    }

    let topics: Vec<&str> = doc.blocks().iter().map(|b| b.topic.as_str()).collect();
    assert_eq!(topics, ["a", "b", "c"]);
}

#[test]
fn remove_deletes_only_the_matching_block() {
    let mut doc = Document::new();
    let keep = block("keep");
    let drop = block("drop");
    let keep_id = keep.id;
    let drop_id = drop.id;
    doc.append(keep);
    doc.append(drop);

    assert!(doc.remove(drop_id));
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.blocks()[0].id, keep_id);
}

#[test]
fn remove_of_absent_id_is_a_noop() {
    let mut doc = Document::new();
    doc.append(block("only"));

    assert!(!doc.remove(Uuid::new_v4()));
    assert_eq!(doc.len(), 1);
}

#[test]
fn append_remove_sequences_leave_exactly_the_survivors() {
    let mut doc = Document::new();
    let blocks: Vec<ContentBlock> = (0..6).map(|i| block(&format!("t{i}"))).collect();
    let ids: Vec<Uuid> = blocks.iter().map(|b| b.id).collect();
    for b in blocks {
        doc.append(b);
    }

    doc.remove(ids[1]);
    doc.remove(ids[4]);

    let remaining: Vec<Uuid> = doc.blocks().iter().map(|b| b.id).collect();
    assert_eq!(remaining, [ids[0], ids[2], ids[3], ids[5]]);
}

#[test]
fn column_split_alternates_by_index_parity() {
    let mut doc = Document::new();
    for topic in ["a", "b", "c", "d", "e"] {
        doc.append(block(topic));
    }

    let (left, right) = split_columns(doc.blocks());
    let left_topics: Vec<&str> = left.iter().map(|b| b.topic.as_str()).collect();
    let right_topics: Vec<&str> = right.iter().map(|b| b.topic.as_str()).collect();

    assert_eq!(left_topics, ["a", "c", "e"]);
    assert_eq!(right_topics, ["b", "d"]);
}

#[test]
fn column_split_of_empty_document_is_empty() {
    let (left, right) = split_columns(&[]);
    assert!(left.is_empty());
    assert!(right.is_empty());
}

#[test]
fn blocks_reject_empty_topic_and_notes() {
    assert!(ContentBlock::new("", "notes", Vec::new()).is_err());
    assert!(ContentBlock::new("   ", "notes", Vec::new()).is_err());
    assert!(ContentBlock::new("topic", "", Vec::new()).is_err());
    assert!(ContentBlock::new("topic", "\n  \n", Vec::new()).is_err());
}

#[test]
fn paragraphs_split_on_embedded_line_breaks() {
    let b = ContentBlock::new("topic", "first\n\nsecond\nthird", Vec::new()).unwrap();
    assert_eq!(b.paragraphs(), ["first", "second", "third"]);
}
