//! Domain layer for quizkey
//!
//! This crate contains the quiz entity model, the markdown grammar
//! (parser and serializers), and the consolidation prompt. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz documents
//!
//! A quiz document is a line-oriented markdown dialect: `# Title` and
//! `## Quiz Type` markers open a quiz, `### Question` blocks hold a
//! stem, checkbox options, and an optional `### Rationale` section.
//! One document may contain several quizzes.
//!
//! ## Derived output
//!
//! From the parsed model two documents can be written: a round-tripped
//! quiz document and a condensed answer key (correct-option letters
//! plus one consolidated rationale per question).

pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use prompt::ConsolidationPrompt;
pub use quiz::{
    answer_key::derive_answer_key,
    entities::{Question, QuestionOption, QuestionRationale, Quiz},
    line::{LineKind, classify},
    parser::{ParseError, parse_quizzes},
    quiz_type::{QuizType, UnknownQuizType},
    writer::{RationaleStyle, write_answer_key_markdown, write_quiz_markdown},
};
