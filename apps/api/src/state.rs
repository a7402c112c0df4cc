use std::sync::Arc;

use crate::auth::store::UserStore;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::progress::store::ProgressStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both stores are process-local maps behind locks — persistence is a known
/// extension point, deliberately absent.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    pub users: Arc<UserStore>,
    pub progress: Arc<ProgressStore>,
}

#[cfg(test)]
impl AppState {
    /// State for handler tests: inert config, empty stores, an LLM client
    /// that is never reached because validation rejects first.
    pub fn for_tests() -> Self {
        let config = Config::for_tests();
        AppState {
            llm: LlmClient::new(config.groq_api_key.clone(), config.groq_model.clone()),
            config,
            users: Arc::new(UserStore::new()),
            progress: Arc::new(ProgressStore::new()),
        }
    }
}
