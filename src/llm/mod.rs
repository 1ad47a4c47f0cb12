//! Answer generation through a hosted language model

pub mod client;
pub mod prompts;

use async_trait::async_trait;

pub use client::AnthropicClient;
pub use prompts::build_chat_prompt;
pub use prompts::PromptTemplate;

use crate::errors::Result;

/// Turns a prompt into a completion
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
