//! notefolio-core
//!
//! Pure domain types: content blocks, the document sequence, inline image
//! validation, and the two-column layout projection. No HTTP or rendering
//! dependency — this is the shared vocabulary of the Notefolio system.

pub mod error;
pub mod models;
