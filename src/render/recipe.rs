//! Recipe page renderer

use super::page_shell;
use crate::content::RecipeRecord;
use maud::{html, Markup};

/// Renders a full recipe page from a loaded record
pub fn recipe_page(record: &RecipeRecord) -> Markup {
    let content = html! {
        article.recipe {
            h1 { (record.title) }
            p.byline { "By " (record.author) }
            img.card src=(record.image_path) alt=(record.title);
            p.description { (record.description) }
            section.ingredients {
                h2 { "Ingredients" }
                ul {
                    @for ingredient in &record.ingredients {
                        li { (ingredient) }
                    }
                }
            }
            section.instructions {
                h2 { "Instructions" }
                ol {
                    @for step in &record.instructions {
                        li { (step) }
                    }
                }
            }
        }
    };
    page_shell(&record.title, content)
}
