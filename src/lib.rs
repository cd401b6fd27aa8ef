//! Recipe web server library
//!
//! An asynchronous HTTP server for a small recipe website: a home page
//! listing the recipes found under a content root, per-recipe pages
//! rendered from `recipe.yml` files, static asset delivery, and an
//! SPA-style index fallback for unmatched paths.

pub mod config;
pub mod content;
pub mod handler;
pub mod http;
pub mod logger;
pub mod render;
