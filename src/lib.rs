pub mod api;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod memory;
pub mod rag;
pub mod search;

mod config_tests;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
