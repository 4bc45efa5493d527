//! Top-level answer resolution: deterministic rules first, retrieval second.
//!
//! `resolve` is total — every question gets a string back. Rule matching is
//! pure and cannot fail; the retrieval fallback's provider errors are caught
//! here and degraded into an apologetic answer instead of propagating. The
//! session's miss counter is only touched once a retrieval outcome is
//! actually known, so a cancelled in-flight call leaves it unchanged.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::retrieval::{AnswerGenerator, PassageRetriever};
use crate::rules::Registry;
use crate::session::SessionState;

/// Escalation ladder for consecutive zero-relevance retrievals. Index 0 on
/// the first miss, capped at the last entry from the third miss onward.
pub const MISS_LADDER: [&str; 3] = [
    "My circuits are tickled—but I don’t have that one yet! Try another question 😊",
    "Still coming up empty—that one might not be in the resume. Try asking about skills, projects, or work history.",
    "Okay, I give up on that one! For anything the resume doesn’t cover, your best bet is to reach out to Bharat directly.",
];

/// Returned when a provider (embedding, index, or model) fails. Distinct from
/// a genuine miss: the miss counter is not advanced for this.
pub const DEGRADED_ANSWER: &str =
    "I’m currently unable to answer that—please give me a moment and try again.";

/// Defensive default so `resolve` stays total even if generation produces
/// nothing usable.
pub const DEFAULT_ANSWER: &str = "I don’t have that one yet—try another question!";

/// Which path produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// A keyword rule fired.
    Rules,
    /// Grounded generation over retrieved passages.
    Retrieval,
    /// Zero relevant passages; a miss-ladder message was returned.
    Miss,
    /// A provider failed; a degraded message was returned.
    Degraded,
}

impl AnswerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Retrieval => "retrieval",
            Self::Miss => "miss",
            Self::Degraded => "degraded",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub answer: String,
    pub source: AnswerSource,
}

/// The resolution pipeline. Owns its collaborators; both retrieval seams are
/// trait objects injected at construction so tests can run against fakes.
pub struct Resolver {
    registry: Registry,
    retriever: Arc<dyn PassageRetriever>,
    generator: Arc<dyn AnswerGenerator>,
    retrieval_limit: usize,
}

impl Resolver {
    pub fn new(
        registry: Registry,
        retriever: Arc<dyn PassageRetriever>,
        generator: Arc<dyn AnswerGenerator>,
        retrieval_limit: usize,
    ) -> Self {
        Self {
            registry,
            retriever,
            generator,
            retrieval_limit,
        }
    }

    /// Resolves one question. Always returns an answer string; updates the
    /// session's miss counter in place according to the retrieval outcome.
    pub async fn resolve(&self, question: &str, session: &mut SessionState) -> Resolution {
        let normalized = question.to_lowercase();

        if let Some(rule_match) = self.registry.match_question(&normalized) {
            debug!("Rule matched: {:?}", rule_match.topic);
            return Resolution {
                answer: rule_match.answer.to_string(),
                source: AnswerSource::Rules,
            };
        }

        // Retrieval gets the raw question, not the normalized one.
        let passages = match self.retriever.retrieve(question, self.retrieval_limit).await {
            Ok(passages) => passages,
            Err(e) => {
                warn!("Retrieval failed, answering degraded: {}", e);
                return Resolution {
                    answer: DEGRADED_ANSWER.to_string(),
                    source: AnswerSource::Degraded,
                };
            }
        };

        if passages.is_empty() {
            // Message first, then advance: the first miss in a fresh session
            // reads ladder step 0, and the ladder caps at its last step.
            let step = (session.miss_count as usize).min(MISS_LADDER.len() - 1);
            session.miss_count = session.miss_count.saturating_add(1);
            debug!("No relevant passages (consecutive misses: {})", session.miss_count);
            return Resolution {
                answer: MISS_LADDER[step].to_string(),
                source: AnswerSource::Miss,
            };
        }

        // A non-empty retrieval is a hit: the counter resets here, before
        // generation, so a failing model call cannot un-reset it.
        session.miss_count = 0;

        match self.generator.generate(question, &passages).await {
            Ok(text) => {
                let answer = if text.trim().is_empty() {
                    DEFAULT_ANSWER.to_string()
                } else {
                    text
                };
                Resolution {
                    answer,
                    source: AnswerSource::Retrieval,
                }
            }
            Err(e) => {
                warn!("Generation failed, answering degraded: {}", e);
                Resolution {
                    answer: DEGRADED_ANSWER.to_string(),
                    source: AnswerSource::Degraded,
                }
            }
        }
    }
}
