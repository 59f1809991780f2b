use rag::{BruteForceIndex, VectorIndex, cosine_similarity, rank, retrieve_context};

fn unit(score: f32) -> Vec<f32> {
    // Against a query of [1, 0] this vector scores exactly `score`.
    vec![score, (1.0 - score * score).sqrt()]
}

#[test]
fn cosine_is_symmetric_and_one_for_itself() {
    let a = [0.3, -1.2, 4.0, 0.5];
    let b = [2.0, 0.1, -0.7, 1.5];
    assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-6);
    assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    assert!((cosine_similarity(&a, &[-0.3, 1.2, -4.0, -0.5]) + 1.0).abs() < 1e-6);
}

#[test]
fn zero_norm_or_mismatched_vectors_score_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
}

#[test]
fn returns_best_texts_joined_by_blank_lines() {
    let texts = vec![
        "apple pie".to_string(),
        "banana split".to_string(),
        "apple tart".to_string(),
    ];
    let embeddings = vec![unit(0.9), unit(0.1), unit(0.8)];
    let context = retrieve_context(&[1.0, 0.0], &embeddings, &texts, 2);
    assert_eq!(context, "apple pie\n\napple tart");
}

#[test]
fn never_returns_more_than_available() {
    let texts = vec!["only".to_string()];
    let embeddings = vec![unit(0.5)];
    assert_eq!(retrieve_context(&[1.0, 0.0], &embeddings, &texts, 3), "only");
    assert_eq!(retrieve_context(&[1.0, 0.0], &[], &[], 3), "");
}

#[test]
fn ranking_is_non_increasing_and_bounded_by_top_k() {
    let vectors: Vec<Vec<f32>> = [0.2, 0.95, -0.4, 0.6, 0.6, 0.0]
        .iter()
        .map(|s| unit(*s))
        .collect();
    let hits = rank(&[1.0, 0.0], vectors.iter().map(Vec::as_slice), 4);
    assert_eq!(hits.len(), 4);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(hits[0].index, 1);
}

#[test]
fn ties_keep_insertion_order() {
    let mut index = BruteForceIndex::new();
    index.add(vec![0.0, 1.0]);
    index.add(vec![1.0, 0.0]);
    index.add(vec![2.0, 0.0]);
    index.add(vec![3.0, 0.0]);
    assert_eq!(index.len(), 4);

    let order: Vec<usize> = index
        .search(&[1.0, 0.0], 10)
        .into_iter()
        .map(|hit| hit.index)
        .collect();
    assert_eq!(order, vec![1, 2, 3, 0]);
}

#[test]
fn zero_norm_candidate_ranks_behind_positive_matches() {
    let index: BruteForceIndex = vec![vec![0.0, 0.0], unit(0.3)].into_iter().collect();
    let hits = index.search(&[1.0, 0.0], 2);
    assert_eq!(hits[0].index, 1);
    assert_eq!(hits[1].index, 0);
    assert_eq!(hits[1].score, 0.0);
}
