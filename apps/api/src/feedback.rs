//! Feedback sink — append-only log of helpfulness clicks.
//!
//! One line per click: `👍 <raw question>` or `👎 <raw question>`. Appends are
//! serialized and written as a single call so concurrent clicks never
//! interleave partial lines. Best-effort telemetry: write failures are logged
//! and swallowed, never surfaced to the user.

use std::io::Write;
use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::warn;

const THUMBS_UP: &str = "👍";
const THUMBS_DOWN: &str = "👎";

pub struct FeedbackSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FeedbackSink {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Appends one feedback line for the raw (non-normalized) question.
    pub async fn append(&self, helpful: bool, question: &str) {
        let symbol = if helpful { THUMBS_UP } else { THUMBS_DOWN };
        let line = format!("{symbol} {question}\n");

        let _guard = self.write_lock.lock().await;
        if let Err(e) = self.append_line(&line) {
            warn!("Failed to append feedback line: {}", e);
        }
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_writes_symbol_space_question_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions_log.txt");
        let sink = FeedbackSink::new(path.clone());

        sink.append(true, "What are your hobbies?").await;
        sink.append(false, "Is he certified?").await;

        let log = std::fs::read_to_string(&path).unwrap();
        assert_eq!(log, "👍 What are your hobbies?\n👎 Is he certified?\n");
    }

    #[tokio::test]
    async fn test_append_preserves_raw_question_casing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions_log.txt");
        let sink = FeedbackSink::new(path.clone());

        sink.append(true, "WHAT DOES HE EAT?").await;

        let log = std::fs::read_to_string(&path).unwrap();
        assert_eq!(log, "👍 WHAT DOES HE EAT?\n");
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        // Directory path cannot be opened as a file; append must not panic.
        let dir = tempfile::tempdir().unwrap();
        let sink = FeedbackSink::new(dir.path().to_path_buf());

        sink.append(true, "does this crash?").await;
    }
}
