//! OpenAI chat-completions adapter.

pub mod gateway;

pub use gateway::OpenAiRationaleGateway;
