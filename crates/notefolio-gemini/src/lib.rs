//! notefolio-gemini
//!
//! Gemini batch note generation: wire types, prompt construction,
//! delimiter-separated answer parsing, and the topic/answer reconciliation
//! policy.

pub mod batch;
pub mod client;
pub mod error;
pub mod types;
