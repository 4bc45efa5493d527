//! Rule matcher — ordered keyword handlers that short-circuit retrieval.
//!
//! Matching is deliberately primitive: case-insensitive substring containment
//! against fixed keyword lists, no stemming, no tokenization. Handler order is
//! the only tie-break rule in the whole system, so it is part of the contract
//! here, not an implementation detail.

pub mod answers;

/// Topic a handler is responsible for. The registry tries topics in the
/// declaration order of [`answers::default_registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    FunFacts,
    RecruiterLogistics,
    CompanyHistory,
    TechStack,
    Education,
    Projects,
    Volunteer,
    Behavioral,
}

/// One (keyword disjunction -> literal answer) rule.
/// Matches when ANY keyword is a substring of the normalized question.
#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

/// All branches for one topic, tried top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct TopicHandler {
    pub topic: Topic,
    pub branches: &'static [Branch],
}

impl TopicHandler {
    /// Returns the first branch whose keyword set hits the question, if any.
    fn try_match(&self, normalized: &str) -> Option<&'static str> {
        self.branches
            .iter()
            .find(|branch| branch.keywords.iter().any(|kw| normalized.contains(kw)))
            .map(|branch| branch.answer)
    }
}

/// A successful rule match: which topic fired and its literal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub topic: Topic,
    pub answer: &'static str,
}

/// Ordered, immutable battery of topic handlers. First match wins; later
/// handlers are never consulted once an earlier one returns an answer.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: &'static [TopicHandler],
}

impl Registry {
    pub const fn new(handlers: &'static [TopicHandler]) -> Self {
        Self { handlers }
    }

    /// Expects an already-normalized (lower-cased) question.
    /// `None` is the normal "no rule applies" result, not a failure.
    pub fn match_question(&self, normalized: &str) -> Option<RuleMatch> {
        self.handlers.iter().find_map(|handler| {
            handler.try_match(normalized).map(|answer| RuleMatch {
                topic: handler.topic,
                answer,
            })
        })
    }

    pub fn handlers(&self) -> &'static [TopicHandler] {
        self.handlers
    }
}

impl Default for Registry {
    fn default() -> Self {
        answers::default_registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: TopicHandler = TopicHandler {
        topic: Topic::FunFacts,
        branches: &[
            Branch {
                keywords: &["red", "crimson"],
                answer: "warm",
            },
            Branch {
                keywords: &["blue"],
                answer: "cool",
            },
        ],
    };

    const SHAPES: TopicHandler = TopicHandler {
        topic: Topic::Projects,
        branches: &[Branch {
            keywords: &["circle", "red"],
            answer: "round",
        }],
    };

    const REGISTRY: Registry = Registry::new(&[COLORS, SHAPES]);

    #[test]
    fn test_any_keyword_in_disjunction_matches() {
        assert_eq!(
            REGISTRY.match_question("is crimson nice?").map(|m| m.answer),
            Some("warm")
        );
        assert_eq!(
            REGISTRY.match_question("i like blue").map(|m| m.answer),
            Some("cool")
        );
    }

    #[test]
    fn test_first_branch_within_handler_wins() {
        // "red ... blue" satisfies both branches of COLORS; the first wins.
        let m = REGISTRY.match_question("red or blue?").unwrap();
        assert_eq!(m.answer, "warm");
    }

    #[test]
    fn test_first_handler_in_order_wins() {
        // "red" satisfies both COLORS and SHAPES; COLORS is earlier.
        let m = REGISTRY.match_question("a red circle").unwrap();
        assert_eq!(m.topic, Topic::FunFacts);
        assert_eq!(m.answer, "warm");
    }

    #[test]
    fn test_no_keyword_means_no_match() {
        assert!(REGISTRY.match_question("tell me about squares").is_none());
    }

    #[test]
    fn test_substring_containment_not_word_match() {
        // No tokenization: "infrared" contains "red".
        assert!(REGISTRY.match_question("infrared light").is_some());
    }

    #[test]
    fn test_match_is_deterministic() {
        let a = REGISTRY.match_question("a red circle");
        let b = REGISTRY.match_question("a red circle");
        assert_eq!(a, b);
    }

    #[test]
    fn test_handler_with_no_branches_never_matches() {
        const EMPTY: Registry = Registry::new(&[TopicHandler {
            topic: Topic::Volunteer,
            branches: &[],
        }]);
        assert!(EMPTY.match_question("anything at all").is_none());
    }
}
