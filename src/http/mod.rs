//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from
//! routing and content logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_400_response, build_403_response, build_404_response,
    build_405_response, build_500_response, build_asset_response, build_html_response,
    build_options_response,
};
