//! Recipe listing
//!
//! Enumerates the recipe identifiers under the content root. Runs once
//! at process startup; the resulting listing is immutable for the
//! lifetime of the server.

use super::ContentError;
use std::fs;
use std::path::Path;

/// List the immediate subdirectories of the content root
///
/// Entries are sorted by name. Hidden directories and non-UTF-8 names
/// are skipped.
pub fn list_recipes(content_root: &str) -> Result<Vec<String>, ContentError> {
    let mut recipes = Vec::new();

    for entry in fs::read_dir(Path::new(content_root))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        recipes.push(name);
    }

    recipes.sort();
    Ok(recipes)
}
