//! Vectara v1 query request and response shapes

use serde::Deserialize;
use serde::Serialize;

/// Top-level body of `POST /v1/query`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: Vec<QueryBody>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryBody {
    pub query: String,
    pub num_results: u32,
    pub corpus_key: Vec<CorpusKey>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CorpusKey {
    pub customer_id: String,
    pub corpus_id: String,
}

impl QueryRequest {
    /// A single query against a single corpus
    pub fn single(query: &str, num_results: u32, customer_id: &str, corpus_id: &str) -> Self {
        Self {
            query: vec![QueryBody {
                query: query.to_string(),
                num_results,
                corpus_key: vec![CorpusKey {
                    customer_id: customer_id.to_string(),
                    corpus_id: corpus_id.to_string(),
                }],
            }],
        }
    }
}

/// Decoded query response. Fields the pipeline does not read are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub response_set: Vec<ResponseSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseSet {
    #[serde(default)]
    pub response: Vec<ResponseItem>,
    #[serde(default)]
    pub document: Vec<Document>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    pub text: String,
    #[serde(default)]
    pub score: f32,
    pub document_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
}
