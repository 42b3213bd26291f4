//! LLM — Gemini client behind a provider-neutral trait.
//!
//! DESIGN
//! ======
//! `types` defines the [`TextModel`] trait and error taxonomy; `config` reads
//! typed settings from the environment; `gemini` is the one concrete client.
//! Story generation depends only on the trait, so tests substitute a mock
//! model and never touch the network.

pub mod config;
pub mod gemini;
pub mod types;

pub use config::LlmConfig;
pub use gemini::GeminiClient;
pub use types::{LlmError, TextModel, TextResponse};
