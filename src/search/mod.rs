//! Retrieval from the Vectara search service
//!
//! - [`client::VectaraClient`] issues the query POST and decodes the response
//! - [`passages`] joins response items to their source documents

pub mod client;
pub mod passages;
pub mod types;

use async_trait::async_trait;

pub use client::VectaraClient;
pub use passages::combine_passages;
pub use passages::extract_passages;
pub use passages::Passage;
pub use types::QueryResponse;

use crate::errors::Result;

/// Source of ranked passages for a query.
///
/// `Ok(None)` means the service answered but returned nothing usable.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> Result<Option<QueryResponse>>;
}
