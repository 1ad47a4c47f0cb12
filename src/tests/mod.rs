//! Shared fixtures for unit tests: stub services and canned search responses

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::errors::RagChatError;
use crate::llm::AnswerGenerator;
use crate::search::types::Document;
use crate::search::types::QueryResponse;
use crate::search::types::ResponseItem;
use crate::search::types::ResponseSet;
use crate::search::Retriever;
use crate::Result;

type Outcome = Box<dyn Fn() -> Result<Option<QueryResponse>> + Send + Sync>;

/// Retriever returning a canned outcome and recording the queries it saw
pub struct StubRetriever {
    outcome: Outcome,
    pub queries: Mutex<Vec<String>>,
}

impl StubRetriever {
    pub fn new(
        outcome: impl Fn() -> Result<Option<QueryResponse>> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            outcome: Box::new(outcome),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn returning(response: QueryResponse) -> Arc<Self> {
        Self::new(move || Ok(Some(response.clone())))
    }

    pub fn failing_with(status: u16, reason: &'static str) -> Arc<Self> {
        Self::new(move || {
            Err(RagChatError::SearchFailed {
                status,
                reason: reason.to_string(),
            })
        })
    }
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn retrieve(&self, query: &str) -> Result<Option<QueryResponse>> {
        self.queries.lock().unwrap().push(query.to_string());
        (self.outcome)()
    }
}

/// Echoes the prompt back as the answer
#[derive(Default)]
pub struct EchoGenerator {
    pub prompts: Mutex<Vec<String>>,
}

impl EchoGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AnswerGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(prompt.to_string())
    }
}

/// Blocks inside `generate` until released, signalling once it has started
#[derive(Default)]
pub struct GatedGenerator {
    pub started: Notify,
    pub release: Notify,
}

impl GatedGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AnswerGenerator for GatedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(prompt.to_string())
    }
}

/// Always fails the way an unreachable or rate-limited API would
pub struct FailingGenerator;

#[async_trait]
impl AnswerGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(RagChatError::LlmError("rate limited".to_string()))
    }
}

/// Two passages whose document indices are deliberately out of list order
pub fn fixture_response() -> QueryResponse {
    QueryResponse {
        response_set: vec![ResponseSet {
            response: vec![
                ResponseItem {
                    text: "Vectara is a search platform.".to_string(),
                    score: 0.9,
                    document_index: 1,
                },
                ResponseItem {
                    text: "Corpora hold documents.".to_string(),
                    score: 0.7,
                    document_index: 0,
                },
            ],
            document: vec![
                Document {
                    id: "corpora.md".to_string(),
                },
                Document {
                    id: "overview.md".to_string(),
                },
            ],
        }],
    }
}

/// A response set with no passages
pub fn empty_response() -> QueryResponse {
    QueryResponse {
        response_set: vec![ResponseSet::default()],
    }
}
