//! Core types shared across the catalog, generators and CLI.

mod url;

pub use url::UrlPath;
