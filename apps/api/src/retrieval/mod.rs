//! Retrieval fallback — the semantic half of the answer pipeline.
//!
//! When no keyword rule fires, the resolver asks a [`PassageRetriever`] for
//! passages relevant to the raw question, then (if anything came back) an
//! [`AnswerGenerator`] for a grounded answer. Both seams are traits so tests
//! can substitute fakes and the resolver never touches a live provider.
//!
//! One fetch feeds both decisions: the same passage list that decides
//! "relevant or not" is stuffed into the generation prompt. Zero relevant
//! passages short-circuits generation entirely to save the model call.

pub mod chunker;
pub mod corpus;
pub mod generator;
pub mod index;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::LlmError;

/// A retrieved slice of resume text with its provenance.
#[derive(Debug, Clone)]
pub struct Passage {
    pub text: String,
    /// Source document file name.
    pub source: String,
    /// Ordinal of the chunk within its source document.
    pub chunk_index: usize,
    /// Cosine similarity against the question, higher is more relevant.
    pub score: f32,
}

/// Provider failure at the retrieval boundary. The resolver converts any of
/// these into a degraded user-facing answer; they never crash a request.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("embedding provider failed: {0}")]
    Embedding(#[source] LlmError),

    #[error("answer generation failed: {0}")]
    Generation(#[source] LlmError),
}

/// Fetches the passages most relevant to a question, best first.
/// An empty result is a normal "nothing relevant" outcome, not an error.
#[async_trait]
pub trait PassageRetriever: Send + Sync {
    async fn retrieve(&self, question: &str, limit: usize)
        -> Result<Vec<Passage>, RetrievalError>;
}

/// Composes an answer to the question grounded in the given passages.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(
        &self,
        question: &str,
        passages: &[Passage],
    ) -> Result<String, RetrievalError>;
}
