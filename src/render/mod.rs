//! Page rendering module
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/) compile-time
//! templates. Rendering is infallible and does no I/O; handlers pass in
//! already-loaded content.

mod home;
mod recipe;

pub use home::home_page;
pub use recipe::recipe_page;

use maud::{html, Markup, DOCTYPE};

/// Renders the base HTML document structure shared by all pages
pub(crate) fn page_shell(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                header.site-header {
                    a.site-title href="/" { "Recipe Box" }
                    nav.site-nav {
                        a href="/" { "Recipes" }
                        a href="/about" { "About" }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}
