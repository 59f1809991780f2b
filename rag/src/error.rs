use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("invalid chunking: overlap {overlap} must be smaller than chunk size {size}")]
    InvalidChunking { size: usize, overlap: usize },

    #[error("top_k must be at least 1")]
    InvalidTopK,

    #[error("cannot read documents folder {}: {source}", .path.display())]
    Folder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("POST {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("POST {url} failed: {status} {body}")]
    Http { url: String, status: u16, body: String },

    #[error("POST {url} decode failed: {reason}")]
    Decode { url: String, reason: String },

    #[error("question is {len} characters, the limit is {max}")]
    QuestionTooLong { len: usize, max: usize },

    #[error("{0} returned no result")]
    EmptyResponse(&'static str),

    #[error("{texts} texts paired with {embeddings} embeddings")]
    Misaligned { texts: usize, embeddings: usize },
}

/// Why a single document was left out of the corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf extraction failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error(transparent)]
    Chunking(#[from] RagError),
}
