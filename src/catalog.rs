//! Catalog module
//!
//! Owns the comic data model, decoding of the catalog API's JSON envelope,
//! request signing, the async HTTP client, and the background loader that
//! hands the collection back to the UI thread.

mod auth;
mod client;
pub mod loader;
mod types;
mod wire;

pub use auth::{Credentials, sign};
pub use client::CatalogClient;
pub use loader::{CatalogLoader, CatalogSource, LoadingState, load_blocking};
pub use types::{CharacterRef, ComicRecord};
pub use wire::parse_catalog;
