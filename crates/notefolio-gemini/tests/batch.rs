use notefolio_gemini::batch::{
    batch_prompt, blocks_from_answers, parse_topics, reconcile, split_answers,
    ANSWER_DELIMITER, MISSING_ANSWER_PLACEHOLDER,
};

fn topics(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn topics_split_per_line_ignoring_blanks() {
    let parsed = parse_topics("  Bayesian networks \n\n\nMarkov chains\n   \n");
    assert_eq!(parsed, ["Bayesian networks", "Markov chains"]);
}

#[test]
fn empty_input_yields_no_topics() {
    assert!(parse_topics("").is_empty());
    assert!(parse_topics("\n  \n").is_empty());
}

#[test]
fn prompt_lists_every_topic_and_names_the_delimiter() {
    let prompt = batch_prompt(&topics(&["alpha", "beta"]));
    assert!(prompt.contains(ANSWER_DELIMITER));
    assert!(prompt.contains("1. alpha"));
    assert!(prompt.contains("2. beta"));
}

#[test]
fn answers_are_split_trimmed_and_denumbered() {
    let text = "1. first answer ||| 2 second answer |||3.third answer";
    assert_eq!(
        split_answers(text),
        ["first answer", "second answer", "third answer"]
    );
}

#[test]
fn empty_segments_are_dropped() {
    assert_eq!(split_answers("one ||| ||| two |||"), ["one", "two"]);
}

#[test]
fn single_answer_is_duplicated_across_all_topics() {
    let t = topics(&["a", "b", "c"]);
    let reconciled = reconcile(&t, &["only answer".to_string()]);
    assert_eq!(reconciled, ["only answer", "only answer", "only answer"]);
}

#[test]
fn extra_answers_are_truncated() {
    let t = topics(&["a", "b"]);
    let answers: Vec<String> = (1..=5).map(|i| format!("ans{i}")).collect();
    assert_eq!(reconcile(&t, &answers), ["ans1", "ans2"]);
}

#[test]
fn missing_answers_get_the_placeholder() {
    let t = topics(&["a", "b", "c"]);
    let answers = vec!["ans1".to_string(), "ans2".to_string()];
    assert_eq!(
        reconcile(&t, &answers),
        ["ans1", "ans2", MISSING_ANSWER_PLACEHOLDER]
    );
}

#[test]
fn one_topic_one_answer_pairs_directly() {
    let t = topics(&["a"]);
    assert_eq!(reconcile(&t, &["ans".to_string()]), ["ans"]);
}

#[test]
fn blocks_carry_topic_answer_pairs_with_no_images() {
    let t = topics(&["a", "b"]);
    let notes = vec!["first".to_string(), "second".to_string()];

    let blocks = blocks_from_answers(&t, &notes).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].topic, "a");
    assert_eq!(blocks[0].notes, "first");
    assert_eq!(blocks[1].topic, "b");
    assert_eq!(blocks[1].notes, "second");
    assert!(blocks.iter().all(|b| b.images.is_empty()));
    assert_ne!(blocks[0].id, blocks[1].id);
}
