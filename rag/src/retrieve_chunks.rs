use std::cmp::Ordering;

/// Cosine of the angle between `a` and `b`.
///
/// Returns 0.0 when either vector has zero norm or the lengths differ, so such
/// candidates rank below any positively aligned one.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let score = dot / denominator;
    if score.is_nan() { 0.0 } else { score }
}

/// Scores each vector against `query` and keeps the best `top_k`, best first.
pub fn rank<'a, I>(query: &[f32], vectors: I, top_k: usize) -> Vec<Hit>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut hits: Vec<Hit> = vectors
        .into_iter()
        .enumerate()
        .map(|(index, v)| Hit {
            index,
            score: cosine_similarity(query, v),
        })
        .collect();
    // sort_by is stable, which keeps ties in index order.
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits.truncate(top_k);
    hits
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Position of the candidate in insertion order.
    pub index: usize,
    pub score: f32,
}

/// Storage that can rank its vectors against a query.
pub trait VectorIndex {
    fn add(&mut self, vector: Vec<f32>);

    /// At most `top_k` hits, best first; equal scores keep insertion order.
    fn search(&self, query: &[f32], top_k: usize) -> Vec<Hit>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scores every stored vector on each search.
#[derive(Clone, Debug, Default)]
pub struct BruteForceIndex {
    vectors: Vec<Vec<f32>>,
}

impl BruteForceIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<Vec<f32>> for BruteForceIndex {
    fn from_iter<I: IntoIterator<Item = Vec<f32>>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}

impl VectorIndex for BruteForceIndex {
    fn add(&mut self, vector: Vec<f32>) {
        self.vectors.push(vector);
    }

    fn search(&self, query: &[f32], top_k: usize) -> Vec<Hit> {
        rank(query, self.vectors.iter().map(Vec::as_slice), top_k)
    }

    fn len(&self) -> usize {
        self.vectors.len()
    }
}

/// Ranks `embeddings` against `query` and joins the best `top_k` texts, highest score
/// first, separated by a blank line.
pub fn retrieve_context(
    query: &[f32],
    embeddings: &[Vec<f32>],
    texts: &[String],
    top_k: usize,
) -> String {
    let hits = rank(query, embeddings.iter().map(Vec::as_slice), top_k);
    format_context(&hits, texts)
}

pub(crate) fn format_context(hits: &[Hit], texts: &[String]) -> String {
    hits.iter()
        .filter_map(|hit| texts.get(hit.index))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}
