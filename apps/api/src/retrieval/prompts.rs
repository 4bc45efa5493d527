// Prompt constants for grounded answer generation. The generator stuffs the
// retrieved passages into {context} and the raw question into {question}.

/// System prompt: answer only from the provided resume excerpts.
pub const GROUNDED_ANSWER_SYSTEM: &str = "You are a portfolio assistant answering questions \
    about Bharat's professional background. \
    Answer using ONLY the resume excerpts provided in the context. \
    If the context does not contain the answer, say you don't know. \
    Do NOT invent employers, dates, projects, or technologies. \
    Be concise and factual.";

/// User prompt template for the context-stuffing call.
pub const GROUNDED_ANSWER_PROMPT: &str = "\
Context (resume excerpts):
{context}

Question: {question}

Answer:";

/// Separator between stuffed passages.
pub const PASSAGE_SEPARATOR: &str = "\n\n---\n\n";
