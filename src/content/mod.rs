//! Content repository module
//!
//! Loads recipe records from the content root and enumerates the recipe
//! identifiers available at startup. Every failure is a typed error the
//! routing layer maps to a per-request HTTP status; nothing in here can
//! take the process down once the server is serving.

mod listing;
mod recipe;

pub use listing::list_recipes;
pub use recipe::{load_recipe, RecipeRecord};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid recipe identifier")]
    InvalidId,
    #[error("recipe not found")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
