mod build_prompt;
mod chunk_text;
mod config;
mod embed_chunks;
mod embed_query;
mod error;
mod generate;
mod http;
mod load_documents;
mod read_pdf;
mod retrieve_chunks;

use std::path::Path;

use tracing::{debug, info};

pub use build_prompt::{build_prompt_with_context, build_user_prompt, Message, SYSTEM_PROMPT};
pub use chunk_text::chunk_text;
pub use config::Config;
pub use embed_chunks::{embed_texts, EmbeddedTexts, Embedder};
pub use embed_query::embed_query;
pub use error::{LoadError, RagError};
pub use generate::{generate_answer, ChatModel};
pub use http::ApiClient;
pub use load_documents::{load_documents, LoadReport, SkippedFile};
pub use read_pdf::extract_pdf_text;
pub use retrieve_chunks::{
    cosine_similarity, rank, retrieve_context, BruteForceIndex, Hit, VectorIndex,
};

/// Embedded document chunks held in memory for one session.
#[derive(Clone, Debug, Default)]
pub struct Corpus<I = BruteForceIndex> {
    chunks: Vec<String>,
    index: I,
}

impl Corpus<BruteForceIndex> {
    pub fn new(embedded: EmbeddedTexts) -> Self {
        Self::with_index(embedded, BruteForceIndex::new())
    }
}

impl<I: VectorIndex> Corpus<I> {
    /// Fills `index` with the embeddings; chunk `i` stays paired with vector `i`.
    pub fn with_index(embedded: EmbeddedTexts, mut index: I) -> Self {
        let (texts, embeddings) = embedded.into_parts();
        for vector in embeddings {
            index.add(vector);
        }
        Self { chunks: texts, index }
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Best `top_k` chunks for `query`, joined by blank lines.
    pub fn context_for(&self, query: &[f32], top_k: usize) -> String {
        let hits = self.index.search(query, top_k);
        debug!(?hits, "retrieved chunks");
        retrieve_chunks::format_context(&hits, &self.chunks)
    }
}

/// Loads, chunks and embeds the documents folder named in `cfg`. The returned report
/// only lists the skipped files; its chunks have moved into the corpus.
pub fn index_corpus<E: Embedder + ?Sized>(
    cfg: &Config,
    embedder: &E,
) -> Result<(Corpus, LoadReport), RagError> {
    let mut report = load_documents(Path::new(&cfg.source_dir), cfg.chunk_size, cfg.chunk_overlap)?;
    info!(
        chunks = report.chunks.len(),
        skipped = report.skipped.len(),
        "created document chunks"
    );

    let chunks = std::mem::take(&mut report.chunks);
    let embedded = embed_texts(embedder, chunks, cfg.max_embed_chars)?;
    info!(embedded = embedded.len(), "embeddings ready");

    Ok((Corpus::new(embedded), report))
}

/// Answers `question` from the corpus. Returns the retrieved context and the answer.
pub fn answer_query<E, C, I>(
    cfg: &Config,
    embedder: &E,
    chat: &C,
    corpus: &Corpus<I>,
    question: &str,
) -> Result<(String, String), RagError>
where
    E: Embedder + ?Sized,
    C: ChatModel + ?Sized,
    I: VectorIndex,
{
    let query_vec = embed_query(embedder, question, cfg.max_embed_chars)?;
    let context = corpus.context_for(&query_vec, cfg.top_k);
    let messages = build_prompt_with_context(cfg, question, &context);
    let answer = generate_answer(chat, &messages, cfg.temperature)?;
    Ok((context, answer))
}
