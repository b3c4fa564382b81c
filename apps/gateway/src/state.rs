use crate::completions::CompletionClient;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion client, present only when the process was configured with
    /// a provider credential. AI handlers check this once per request.
    pub completions: Option<CompletionClient>,
}
