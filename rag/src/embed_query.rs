use crate::embed_chunks::Embedder;
use crate::error::RagError;

/// Embeds a question under the same length limit as chunks. An oversized question is
/// an error so it is never answered without context.
pub fn embed_query<E: Embedder + ?Sized>(
    embedder: &E,
    question: &str,
    max_chars: usize,
) -> Result<Vec<f32>, RagError> {
    let len = question.chars().count();
    if len > max_chars {
        return Err(RagError::QuestionTooLong { len, max: max_chars });
    }
    embedder.embed(question)
}
