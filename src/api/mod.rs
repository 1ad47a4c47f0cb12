//! API server module serving the chat page and a JSON API

pub mod handlers;
pub mod page;
pub mod routes;
pub mod server;
pub mod types;

pub use server::serve_chat;
