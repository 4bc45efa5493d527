use std::sync::Arc;

use crate::config::Config;
use crate::feedback::FeedbackSink;
use crate::resolver::Resolver;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub sessions: Arc<SessionStore>,
    pub feedback: Arc<FeedbackSink>,
    /// Kept for handlers that need runtime settings later; nothing reads it yet.
    #[allow(dead_code)]
    pub config: Config,
}
