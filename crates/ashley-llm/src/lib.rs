//! Inference backend adapter for Ashley.
//!
//! Implements the chat core's outbound `QueryBackend` seam with an HTTP
//! client against an OpenAI-compatible chat-completions endpoint (the
//! IONOS AI Model Hub by default).

pub mod client;
pub mod error;

pub use client::InferenceClient;
pub use error::LlmError;
