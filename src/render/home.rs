//! Home page renderer

use super::page_shell;
use maud::{html, Markup};

/// Renders the home page listing every available recipe
pub fn home_page(recipes: &[String]) -> Markup {
    let content = html! {
        h1 { "Recipes" }
        @if recipes.is_empty() {
            p.empty { "No recipes yet." }
        } @else {
            ul.recipe-list {
                @for recipe in recipes {
                    li {
                        a href={ "/recipe/" (recipe) } { (display_name(recipe)) }
                    }
                }
            }
        }
    };
    page_shell("Recipes", content)
}

/// Turn a directory name into a human-readable title
fn display_name(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
