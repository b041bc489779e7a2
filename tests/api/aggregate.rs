//! tests/api/aggregate.rs
use crate::helpers::{ScratchDir, setup_tracing, test_file};
use claims::{assert_none, assert_some_eq};
use std::path::PathBuf;
use wordcount::aggregator::{Aggregator, aggregate};
use wordcount::counter;
use wordcount::word_count::WordCount;

const VOCABULARY: [&str; 16] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliett",
    "kilo", "lima", "mike", "november", "oscar", "papa",
];

/// `words` tokens drawn from [`VOCABULARY`], separated by assorted
/// punctuation, with a few one-letter noise tokens mixed in.
fn random_text(words: usize) -> String {
    let separators = [" ", ", ", ". ", "\n", " -- ", "; ", " 42 "];
    let mut text = String::new();
    let mut produced = 0;
    while produced < words {
        for byte in uuid::Uuid::new_v4().as_bytes() {
            if produced == words {
                break;
            }
            text.push_str(VOCABULARY[(*byte as usize) % VOCABULARY.len()]);
            text.push_str(separators[(*byte as usize) % separators.len()]);
            if byte % 5 == 0 {
                text.push_str("x ");
            }
            produced += 1;
        }
    }
    text
}

fn sequential(files: &[PathBuf]) -> WordCount {
    let mut words = WordCount::new();
    for path in files {
        let (local, _) = counter::count(path);
        words.merge(local);
    }
    words
}

#[tokio::test]
async fn should_count_fixture_files() {
    setup_tracing();
    let files = vec![test_file("input_0.txt"), test_file("input_1.txt")];

    let words = aggregate(&files).await;

    assert_some_eq!(words.get("rust"), 3);
    assert_some_eq!(words.get("is"), 4);
    assert_some_eq!(words.get("programming"), 2);
    assert_some_eq!(words.get("channels"), 2);
    assert_none!(words.get("a"));
    assert_eq!(words.total(), 22);
}

#[tokio::test]
async fn should_fold_case_of_non_ascii_words() {
    setup_tracing();
    let words = aggregate(&[test_file("input_2.txt")]).await;

    assert_some_eq!(words.get("über"), 2);
    assert_some_eq!(words.get("日本語"), 1);
    assert_some_eq!(words.get("straße"), 1);
    assert_none!(words.get("ÜBER"));
}

#[tokio::test]
async fn aggregating_two_files_should_equal_merging_each_alone() {
    setup_tracing();
    let a = test_file("input_0.txt");
    let b = test_file("input_1.txt");

    let both = aggregate(&[a.clone(), b.clone()]).await;
    let mut merged = aggregate(&[a]).await;
    merged.merge(aggregate(&[b]).await);

    assert_eq!(both, merged);
}

#[tokio::test]
async fn missing_files_should_not_stop_the_others() {
    setup_tracing();
    let scratch = ScratchDir::new();
    let files = vec![
        scratch.path().join("missing_0.txt"),
        test_file("small_test.txt"),
        scratch.path().join("missing_1.txt"),
    ];
    let mut words = WordCount::new();

    let stats = Aggregator::default().run(&files, &mut words).await;

    assert_eq!(stats.workers, 3);
    assert_eq!(
        stats.failed_files.len(),
        2,
        "Unexpected failures: {:?}",
        stats.failed_files
    );
    assert!(!stats.failed_files.contains(&test_file("small_test.txt")));
    assert_eq!(words, sequential(&[test_file("small_test.txt")]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn no_contribution_should_be_lost_or_doubled_for_any_worker_count() {
    setup_tracing();
    let scratch = ScratchDir::new();
    for n in 1..=12 {
        let files: Vec<PathBuf> = (0..n)
            .map(|i| scratch.write(&format!("n{n}_{i}.txt"), &random_text(200)))
            .collect();
        let expected = sequential(&files);
        let expected_contributions: usize = files
            .iter()
            .map(|path| counter::count(path).0.len())
            .sum();

        let mut words = WordCount::new();
        let stats = Aggregator::default().run(&files, &mut words).await;

        assert_eq!(stats.workers, n);
        assert_eq!(stats.contributions, expected_contributions);
        assert_eq!(words.total(), expected.total());
        assert_eq!(words.total(), 200 * n);
        assert_eq!(words, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_runs_should_always_agree() {
    setup_tracing();
    let scratch = ScratchDir::new();
    let files: Vec<PathBuf> = (0..50)
        .map(|i| scratch.write(&format!("stress_{i}.txt"), &random_text(1000)))
        .collect();
    let expected = sequential(&files);
    assert_eq!(expected.total(), 50 * 1000);

    for capacity in [0, 1, 7, 50, 1024] {
        for _ in 0..5 {
            let mut words = WordCount::new();
            let stats = Aggregator::new(capacity).run(&files, &mut words).await;
            assert!(stats.failed_files.is_empty());
            assert_eq!(words, expected);
        }
    }
}
