// Application state module
// Holds the configuration and the startup-time recipe listing

use super::types::Config;

/// Application state shared by all request handlers
///
/// The recipe listing is scanned once at startup and never mutated
/// afterwards; recipes added to the content root while the server is
/// running are not picked up until restart.
pub struct AppState {
    pub config: Config,
    pub recipes: Vec<String>,
}

impl AppState {
    pub fn new(config: Config, recipes: Vec<String>) -> Self {
        Self { config, recipes }
    }
}
