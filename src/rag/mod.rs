//! RAG (Retrieval-Augmented Generation) chat module
//!
//! One chat turn runs the full pipeline:
//! - Retrieval of ranked passages from the Vectara corpus
//! - Citation of each passage's source document
//! - Prompt assembly from conversation history, the query and the passages
//! - LLM-based answer generation
//! - Recording the turn in conversation memory
//!
//! # Examples
//!
//! ```rust,no_run
//! use ragchat::config::AppConfig;
//! use ragchat::memory::ConversationMemory;
//! use ragchat::rag::ChatBot;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load("config.toml")?;
//!     let bot = ChatBot::new(&config)?;
//!     let mut memory = ConversationMemory::new();
//!
//!     let reply = bot.chat("What does the handbook say about onboarding?", &mut memory).await?;
//!     println!("Bot: {}", reply.answer);
//!
//!     Ok(())
//! }
//! ```

pub mod pipeline;

pub use pipeline::ChatBot;
pub use pipeline::ChatReply;
pub use pipeline::NO_RESULT_MESSAGE;
