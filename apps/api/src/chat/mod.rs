//! Chat API — the JSON surface over the resolver and the feedback sink.

pub mod handlers;
