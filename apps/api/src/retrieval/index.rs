//! Persisted vector index over chunked resume text.
//!
//! Built once from the corpus, saved as JSON, reloaded on later starts. The
//! index is read-only after construction; queries embed the question and rank
//! chunks by cosine similarity. A persisted file recording a different
//! embedding model is rejected — its vectors are not comparable to fresh
//! query embeddings.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::{LlmError, OpenAiClient, EMBEDDING_MODEL};
use crate::retrieval::chunker::{chunk_text, CHUNK_OVERLAP, CHUNK_SIZE};
use crate::retrieval::corpus::SourceDocument;
use crate::retrieval::{Passage, PassageRetriever, RetrievalError};

/// How many passages a query returns at most.
pub const DEFAULT_TOP_K: usize = 4;

/// Cosine similarity below this counts as "not relevant". ada-002 scores
/// cluster high, so the floor sits well above zero.
pub const DEFAULT_RELEVANCE_FLOOR: f32 = 0.75;

const PERSIST_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("index was built with embedding model '{found}', expected '{expected}'")]
    ModelMismatch { found: String, expected: String },

    #[error("embedding provider failed during index build: {0}")]
    Embedding(#[from] LlmError),
}

/// One chunk with its provenance and embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    pub text: String,
    pub source: String,
    pub chunk_index: usize,
    pub embedding: Vec<f32>,
}

#[derive(Serialize, Deserialize)]
struct PersistedIndex {
    version: u32,
    model: String,
    chunks: Vec<IndexedChunk>,
}

/// In-memory vector index. Immutable once built or loaded.
#[derive(Debug)]
pub struct VectorIndex {
    chunks: Vec<IndexedChunk>,
}

impl VectorIndex {
    /// Chunks every document (500-char windows, 50-char overlap), embeds each
    /// chunk, and assembles the index.
    pub async fn build(
        documents: &[SourceDocument],
        embedder: &OpenAiClient,
    ) -> Result<Self, IndexError> {
        let mut chunks = Vec::new();

        for document in documents {
            let fragments = chunk_text(&document.text, CHUNK_SIZE, CHUNK_OVERLAP);
            info!("Embedding {} chunks from '{}'", fragments.len(), document.name);

            for (chunk_index, text) in fragments.into_iter().enumerate() {
                let embedding = embedder.embed(&text).await?;
                chunks.push(IndexedChunk {
                    text,
                    source: document.name.clone(),
                    chunk_index,
                    embedding,
                });
            }
        }

        Ok(Self { chunks })
    }

    /// Builds an index directly from pre-embedded chunks. Test seam.
    pub fn from_chunks(chunks: Vec<IndexedChunk>) -> Self {
        Self { chunks }
    }

    /// Writes the index as JSON at `path`, tagged with the embedding model.
    pub fn persist(&self, path: &Path) -> Result<(), IndexError> {
        let state = PersistedIndex {
            version: PERSIST_VERSION,
            model: EMBEDDING_MODEL.to_string(),
            chunks: self.chunks.clone(),
        };
        let data = serde_json::to_string(&state)?;
        std::fs::write(path, data)?;
        debug!("Persisted {} chunks to {}", self.chunks.len(), path.display());
        Ok(())
    }

    /// Reloads a persisted index, verifying the embedding model matches.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let data = std::fs::read_to_string(path)?;
        let state: PersistedIndex = serde_json::from_str(&data)?;

        if state.model != EMBEDDING_MODEL {
            return Err(IndexError::ModelMismatch {
                found: state.model,
                expected: EMBEDDING_MODEL.to_string(),
            });
        }

        info!("Loaded {} chunks from {}", state.chunks.len(), path.display());
        Ok(Self {
            chunks: state.chunks,
        })
    }

    /// Ranks chunks against `query_embedding`, returning at most `k` passages
    /// scoring at or above `floor`, best first.
    pub fn query(&self, query_embedding: &[f32], k: usize, floor: f32) -> Vec<Passage> {
        let mut scored: Vec<Passage> = self
            .chunks
            .iter()
            .map(|chunk| Passage {
                text: chunk.text.clone(),
                source: chunk.source.clone(),
                chunk_index: chunk.chunk_index,
                score: cosine_similarity(query_embedding, &chunk.embedding),
            })
            .filter(|p| p.score >= floor)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Query-side retriever: embeds the question and searches the index.
pub struct IndexRetriever {
    index: Arc<VectorIndex>,
    embedder: Arc<OpenAiClient>,
    relevance_floor: f32,
}

impl IndexRetriever {
    pub fn new(index: Arc<VectorIndex>, embedder: Arc<OpenAiClient>) -> Self {
        Self {
            index,
            embedder,
            relevance_floor: DEFAULT_RELEVANCE_FLOOR,
        }
    }
}

#[async_trait]
impl PassageRetriever for IndexRetriever {
    async fn retrieve(
        &self,
        question: &str,
        limit: usize,
    ) -> Result<Vec<Passage>, RetrievalError> {
        let query_embedding = self
            .embedder
            .embed(question)
            .await
            .map_err(RetrievalError::Embedding)?;

        let passages = self.index.query(&query_embedding, limit, self.relevance_floor);
        debug!("Retrieved {} relevant passages", passages.len());
        Ok(passages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str, source: &str, chunk_index: usize, embedding: Vec<f32>) -> IndexedChunk {
        IndexedChunk {
            text: text.to_string(),
            source: source.to_string(),
            chunk_index,
            embedding,
        }
    }

    #[test]
    fn test_cosine_similarity_of_identical_vectors_is_one() {
        let v = vec![0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_of_orthogonal_vectors_is_zero() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_handles_mismatched_and_zero_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_query_ranks_by_similarity_descending() {
        let index = VectorIndex::from_chunks(vec![
            chunk("far", "resume.pdf", 0, vec![0.0, 1.0]),
            chunk("near", "resume.pdf", 1, vec![1.0, 0.1]),
            chunk("exact", "resume.pdf", 2, vec![1.0, 0.0]),
        ]);

        let results = index.query(&[1.0, 0.0], 3, 0.5);
        let texts: Vec<&str> = results.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["exact", "near"]);
    }

    #[test]
    fn test_query_applies_relevance_floor() {
        let index = VectorIndex::from_chunks(vec![chunk(
            "irrelevant",
            "resume.pdf",
            0,
            vec![0.0, 1.0],
        )]);

        let results = index.query(&[1.0, 0.0], 4, 0.75);
        assert!(results.is_empty(), "below-floor chunks must not count as relevant");
    }

    #[test]
    fn test_query_truncates_to_k() {
        let chunks: Vec<IndexedChunk> = (0..10)
            .map(|i| chunk("c", "resume.pdf", i, vec![1.0, 0.0]))
            .collect();
        let index = VectorIndex::from_chunks(chunks);

        assert_eq!(index.query(&[1.0, 0.0], 4, 0.0).len(), 4);
    }

    #[test]
    fn test_query_with_zero_limit_returns_nothing() {
        let index = VectorIndex::from_chunks(vec![chunk("c", "resume.pdf", 0, vec![1.0, 0.0])]);
        assert!(index.query(&[1.0, 0.0], 0, 0.0).is_empty());
    }

    #[test]
    fn test_persist_then_load_round_trips_chunks_and_provenance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let index = VectorIndex::from_chunks(vec![chunk(
            "Worked on a loan management system",
            "resume.pdf",
            7,
            vec![0.1, 0.2, 0.3],
        )]);
        index.persist(&path).unwrap();

        let loaded = VectorIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        let results = loaded.query(&[0.1, 0.2, 0.3], 1, 0.5);
        assert_eq!(results[0].source, "resume.pdf");
        assert_eq!(results[0].chunk_index, 7);
    }

    #[test]
    fn test_load_rejects_foreign_embedding_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let state = PersistedIndex {
            version: PERSIST_VERSION,
            model: "some-other-model".to_string(),
            chunks: vec![],
        };
        std::fs::write(&path, serde_json::to_string(&state).unwrap()).unwrap();

        let err = VectorIndex::load(&path).unwrap_err();
        assert!(matches!(err, IndexError::ModelMismatch { .. }));
    }
}
