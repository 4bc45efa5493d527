//! Source corpus loading — every PDF in the knowledge directory.
//!
//! An unreadable or empty corpus is fatal for the index build: the server
//! aborts startup rather than silently serving an empty index.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("knowledge directory '{0}' does not exist or is unreadable")]
    MissingDirectory(String),

    #[error("no PDF documents with extractable text found in '{0}'")]
    NoDocuments(String),
}

/// One source document: file name plus its extracted text.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

/// Reads every `.pdf` in `dir` and extracts its text.
///
/// Individual documents that fail extraction are skipped with a warning; the
/// load as a whole fails only if the directory is missing or nothing usable
/// remains.
pub fn load_corpus(dir: &Path) -> Result<Vec<SourceDocument>, CorpusError> {
    let entries = fs::read_dir(dir)
        .map_err(|_| CorpusError::MissingDirectory(dir.display().to_string()))?;

    let mut documents = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.pdf")
            .to_string();

        match pdf_extract::extract_text(&path) {
            Ok(text) if !text.trim().is_empty() => {
                info!("Loaded '{}' ({} characters)", name, text.chars().count());
                documents.push(SourceDocument { name, text });
            }
            Ok(_) => {
                warn!("Skipping '{}': no extractable text", name);
            }
            Err(e) => {
                warn!("Skipping '{}': extraction failed: {}", name, e);
            }
        }
    }

    if documents.is_empty() {
        return Err(CorpusError::NoDocuments(dir.display().to_string()));
    }

    // Stable order so chunk ordinals are reproducible across rebuilds.
    documents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = load_corpus(Path::new("/nonexistent/knowledge_base")).unwrap_err();
        assert!(matches!(err, CorpusError::MissingDirectory(_)));
    }

    #[test]
    fn test_directory_without_pdfs_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a pdf").unwrap();

        let err = load_corpus(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::NoDocuments(_)));
    }
}
