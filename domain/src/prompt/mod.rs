//! Prompt construction for the rationale generator.

pub mod consolidation;

pub use consolidation::ConsolidationPrompt;
