//! Recipe record loading
//!
//! A recipe lives at `{content_root}/{id}/recipe.yml` with PascalCase
//! keys. Records are loaded fresh on every request and never cached.

use super::ContentError;
use crate::config::ContentConfig;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// A recipe as stored in its metadata file
///
/// `image_path` is not part of the stored record; it is always derived
/// from the recipe identifier and the configured card image name.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "Instructions")]
    pub instructions: Vec<String>,
    #[serde(skip)]
    pub image_path: String,
}

/// Load and parse a recipe by identifier
///
/// The identifier is used as a directory name, so it must be a single
/// normal path segment; anything else is rejected before touching the
/// filesystem.
pub async fn load_recipe(content: &ContentConfig, id: &str) -> Result<RecipeRecord, ContentError> {
    if !is_safe_segment(id) {
        return Err(ContentError::InvalidId);
    }

    let path = Path::new(&content.content_root)
        .join(id)
        .join(&content.recipe_file);

    let raw = match fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ContentError::NotFound);
        }
        Err(e) => return Err(ContentError::Io(e)),
    };

    let mut record: RecipeRecord = serde_yaml::from_str(&raw)?;
    record.image_path = format!("/recipe-content/{id}/{}", content.card_image);
    Ok(record)
}

/// Check that an identifier is a single normal path segment
///
/// Rejects empty strings, path separators, NUL bytes, and dotfile-style
/// names (which also covers `.` and `..`).
fn is_safe_segment(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.bytes().any(|b| b == b'/' || b == b'\\' || b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn test_content_config(root: &Path) -> ContentConfig {
        ContentConfig {
            content_root: root.to_string_lossy().into_owned(),
            static_root: "static".to_string(),
            index_file: "index.html".to_string(),
            recipe_file: "recipe.yml".to_string(),
            card_image: "card.jpg".to_string(),
        }
    }

    fn write_recipe(root: &Path, id: &str, yaml: &str) {
        let dir = root.join(id);
        std_fs::create_dir_all(&dir).unwrap();
        std_fs::write(dir.join("recipe.yml"), yaml).unwrap();
    }

    #[tokio::test]
    async fn test_load_recipe() {
        let tmp = tempfile::tempdir().unwrap();
        write_recipe(
            tmp.path(),
            "pancakes",
            "Title: Pancakes\n\
             Description: Fluffy breakfast staple\n\
             Author: Jo Cook\n\
             Ingredients:\n  - flour\n  - egg\n\
             Instructions:\n  - mix\n  - cook\n",
        );

        let cfg = test_content_config(tmp.path());
        let record = load_recipe(&cfg, "pancakes").await.unwrap();
        assert_eq!(record.title, "Pancakes");
        assert_eq!(record.author, "Jo Cook");
        assert_eq!(record.ingredients, vec!["flour", "egg"]);
        assert_eq!(record.instructions, vec!["mix", "cook"]);
        assert_eq!(record.image_path, "/recipe-content/pancakes/card.jpg");
    }

    #[tokio::test]
    async fn test_missing_recipe_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_content_config(tmp.path());
        let err = load_recipe(&cfg, "doesnotexist").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_recipe(tmp.path(), "broken", "Title: [unclosed\n");
        let cfg = test_content_config(tmp.path());
        let err = load_recipe(&cfg, "broken").await.unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[tokio::test]
    async fn test_incomplete_record_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_recipe(tmp.path(), "bare", "Title: Only a title\n");
        let cfg = test_content_config(tmp.path());
        let err = load_recipe(&cfg, "bare").await.unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[tokio::test]
    async fn test_traversal_id_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_content_config(tmp.path());
        for id in ["..", "../secret", "a/b", "a\\b", ".hidden", ""] {
            let err = load_recipe(&cfg, id).await.unwrap_err();
            assert!(matches!(err, ContentError::InvalidId), "id {id:?}");
        }
    }

    #[test]
    fn test_safe_segment() {
        assert!(is_safe_segment("pancakes"));
        assert!(is_safe_segment("beef-wellington"));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment(""));
    }
}
