//! Chat pipeline: Retrieve -> Augment -> Generate -> Remember

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::RagChatError;
use crate::errors::Result;
use crate::llm::build_chat_prompt;
use crate::llm::AnswerGenerator;
use crate::llm::AnthropicClient;
use crate::memory::ConversationMemory;
use crate::search::combine_passages;
use crate::search::extract_passages;
use crate::search::Passage;
use crate::search::Retriever;
use crate::search::VectaraClient;

/// Reply given when retrieval fails or returns nothing
pub const NO_RESULT_MESSAGE: &str = "No result returned from Vectara.";

/// Outcome of one chat turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub answer: String,
    /// Inline error to show next to the answer (search-service failure)
    pub notice: Option<String>,
    #[serde(skip)]
    pub sources: Vec<Passage>,
}

impl ChatReply {
    fn no_result(notice: Option<String>) -> Self {
        Self {
            answer: NO_RESULT_MESSAGE.to_string(),
            notice,
            sources: Vec::new(),
        }
    }
}

/// Orchestrates a chat turn over a retriever and a generator
#[derive(Clone)]
pub struct ChatBot {
    retriever: Arc<dyn Retriever>,
    generator: Arc<dyn AnswerGenerator>,
}

impl ChatBot {
    /// Create the Vectara + Anthropic chatbot
    ///
    /// # Errors
    /// - HTTP client build errors for either service
    pub fn new(config: &AppConfig) -> Result<Self> {
        let retriever = Arc::new(VectaraClient::new(&config.vectara)?);
        let generator = Arc::new(AnthropicClient::new(&config.anthropic)?);
        Ok(Self::from_services(retriever, generator))
    }

    /// Create from existing services
    #[must_use]
    pub fn from_services(
        retriever: Arc<dyn Retriever>,
        generator: Arc<dyn AnswerGenerator>,
    ) -> Self {
        Self {
            retriever,
            generator,
        }
    }

    /// Run one turn against `memory`.
    ///
    /// A failed or empty search short-circuits with [`NO_RESULT_MESSAGE`] and
    /// leaves memory untouched. Otherwise the answer is recorded as a new turn.
    ///
    /// # Errors
    /// - Malformed search responses (missing response set, bad document index)
    /// - Network errors talking to either service
    /// - LLM generation errors (API failures, rate limits, invalid responses)
    pub async fn chat(&self, input: &str, memory: &mut ConversationMemory) -> Result<ChatReply> {
        info!("Processing chat turn: {}", input);

        // Step 1: Retrieve
        debug!("Step 1: Querying search service");
        let response = match self.retriever.retrieve(input).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                warn!("Search service returned an empty result");
                return Ok(ChatReply::no_result(None));
            }
            Err(err @ RagChatError::SearchFailed { .. }) => {
                return Ok(ChatReply::no_result(Some(err.to_string())));
            }
            Err(err) => return Err(err),
        };

        // Step 2: Extract passages with citations
        let passages = extract_passages(&response)?;
        debug!("Extracted {} passages", passages.len());
        let combined = combine_passages(&passages);

        // Step 3: Augment with conversation history
        let history = memory.get_history();
        let prompt = build_chat_prompt(&history, input, &combined);

        // Step 4: Generate
        debug!("Step 4: Generating answer");
        let answer = self.generator.generate(&prompt).await?;

        // Step 5: Remember
        memory.add_interaction(input, answer.clone());
        info!("Chat turn completed, {} turns in memory", memory.len());

        Ok(ChatReply {
            answer,
            notice: None,
            sources: passages,
        })
    }
}
