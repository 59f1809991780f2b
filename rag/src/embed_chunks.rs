use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RagError;
use crate::http::ApiClient;

/// Anything that turns one piece of text into one embedding vector.
pub trait Embedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RagError>;
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl Embedder for ApiClient {
    fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
        let url = self.deployment_url(&self.embedding_deployment, "embeddings");
        let req = EmbedRequest {
            model: &self.embedding_deployment,
            input: text,
        };
        let res = self.post_json::<EmbedResponse, _>(&url, &req)?;
        res.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(RagError::EmptyResponse("embedding service"))
    }
}

/// Texts that passed the length filter, co-indexed with their embeddings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbeddedTexts {
    texts: Vec<String>,
    embeddings: Vec<Vec<f32>>,
}

impl EmbeddedTexts {
    /// Pairs `texts[i]` with `embeddings[i]`; the two lists must be the same length.
    pub fn from_parts(texts: Vec<String>, embeddings: Vec<Vec<f32>>) -> Result<Self, RagError> {
        if texts.len() != embeddings.len() {
            return Err(RagError::Misaligned {
                texts: texts.len(),
                embeddings: embeddings.len(),
            });
        }
        Ok(Self { texts, embeddings })
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<f32>>) {
        (self.texts, self.embeddings)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Embeds each text with one call, skipping any text longer than `max_chars` characters.
/// The first service failure stops the run and is returned.
pub fn embed_texts<E: Embedder + ?Sized>(
    embedder: &E,
    texts: Vec<String>,
    max_chars: usize,
) -> Result<EmbeddedTexts, RagError> {
    let total = texts.len();
    let mut out = EmbeddedTexts::default();

    for text in texts {
        let len = text.chars().count();
        if len > max_chars {
            debug!(len, max_chars, "dropping oversized text");
            continue;
        }
        let vector = embedder.embed(&text)?;
        out.texts.push(text);
        out.embeddings.push(vector);
    }

    let dropped = total - out.len();
    if dropped > 0 {
        info!(dropped, max_chars, "texts over the embedding limit were left out");
    }
    Ok(out)
}
