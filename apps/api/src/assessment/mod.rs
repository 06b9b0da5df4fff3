//! Assessment engine — evaluates an uploaded policy document against the
//! Annex A catalogue, one control per LLM call.
//!
//! Flow: validate selection → extract text → per-control assess (sequential,
//! catalogue order) → aggregate summary → render + persist report artifacts.

pub mod assessor;
pub mod engine;
pub mod handlers;
pub mod prompts;
