//! Grounded answer generation — stuffs retrieved passages into a single chat
//! call and returns the model's text verbatim.

use std::sync::Arc;

use async_trait::async_trait;

use crate::llm_client::OpenAiClient;
use crate::retrieval::prompts::{
    GROUNDED_ANSWER_PROMPT, GROUNDED_ANSWER_SYSTEM, PASSAGE_SEPARATOR,
};
use crate::retrieval::{AnswerGenerator, Passage, RetrievalError};

pub struct GroundedGenerator {
    client: Arc<OpenAiClient>,
}

impl GroundedGenerator {
    pub fn new(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerGenerator for GroundedGenerator {
    async fn generate(
        &self,
        question: &str,
        passages: &[Passage],
    ) -> Result<String, RetrievalError> {
        let prompt = build_prompt(question, passages);
        self.client
            .chat(GROUNDED_ANSWER_SYSTEM, &prompt)
            .await
            .map_err(RetrievalError::Generation)
    }
}

fn build_prompt(question: &str, passages: &[Passage]) -> String {
    let context = passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(PASSAGE_SEPARATOR);

    GROUNDED_ANSWER_PROMPT
        .replace("{context}", &context)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str) -> Passage {
        Passage {
            text: text.to_string(),
            source: "resume.pdf".to_string(),
            chunk_index: 0,
            score: 0.9,
        }
    }

    #[test]
    fn test_prompt_contains_question_and_all_passages() {
        let prompt = build_prompt(
            "What did he build at Capgemini?",
            &[passage("Built enterprise apps"), passage("Used Java and Struts")],
        );
        assert!(prompt.contains("What did he build at Capgemini?"));
        assert!(prompt.contains("Built enterprise apps"));
        assert!(prompt.contains("Used Java and Struts"));
    }

    #[test]
    fn test_passages_are_separated() {
        let prompt = build_prompt("q", &[passage("first"), passage("second")]);
        assert!(prompt.contains("---"));
        let first_pos = prompt.find("first").unwrap();
        let second_pos = prompt.find("second").unwrap();
        assert!(first_pos < second_pos);
    }
}
