//! Markdown serializers for quiz lists.
//!
//! Two independent writers: [`write_quiz_markdown`] re-emits a
//! parseable quiz document, [`write_answer_key_markdown`] emits the
//! condensed answer-key report. The report is not meant to be
//! re-parsed. Neither writer validates its input; the model is assumed
//! to come from a conforming parse.

use crate::quiz::entities::{Question, Quiz};

/// Which rationale text the round-trip writer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationaleStyle {
    /// The original per-option rationale paragraphs, in source order.
    PerOption,
    /// The consolidated paragraph produced by the rationale generator.
    Consolidated,
}

/// Serialize quizzes back to the quiz markdown dialect.
///
/// The emitted document re-parses to a structurally equal quiz list,
/// except that multi-line options gain the two-space continuation
/// indent. A question whose selected rationale text is empty gets no
/// rationale block at all.
pub fn write_quiz_markdown(quizzes: &[Quiz], style: RationaleStyle) -> String {
    let mut out = String::new();
    for quiz in quizzes {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("# Title\n");
        out.push_str(quiz.title());
        out.push('\n');

        if let Some(quiz_type) = quiz.quiz_type() {
            out.push('\n');
            out.push_str("## Quiz Type\n");
            out.push_str(&quiz_type.to_string());
            out.push('\n');
        }

        for question in quiz.questions() {
            out.push('\n');
            out.push_str("### Question\n");
            if !question.stem().is_empty() {
                out.push_str(question.stem());
                out.push('\n');
            }
            if !question.options().is_empty() {
                out.push_str(&question.options_markdown());
                out.push('\n');
            }
            let rationale = rationale_text(question, style);
            if !rationale.is_empty() {
                out.push_str("### Rationale\n");
                out.push_str(&rationale);
                out.push('\n');
            }
        }
    }
    out
}

fn rationale_text(question: &Question, style: RationaleStyle) -> String {
    match style {
        RationaleStyle::PerOption => question.rationales_markdown(),
        RationaleStyle::Consolidated => question.consolidated_rationale().trim().to_string(),
    }
}

/// Serialize the condensed answer-key report.
///
/// One numbered line per question: 1-based position, the letter-coded
/// correct options, and the consolidated rationale.
pub fn write_answer_key_markdown(quizzes: &[Quiz]) -> String {
    let mut out = String::from("# Answer Key\n");
    for quiz in quizzes {
        out.push('\n');
        out.push_str("## ");
        out.push_str(quiz.title());
        out.push('\n');
        for (index, question) in quiz.questions().iter().enumerate() {
            let entry = format!(
                "{}. {}. {}",
                index + 1,
                question.answer_key_letters(),
                question.consolidated_rationale()
            );
            out.push_str(entry.trim_end());
            out.push('\n');
        }
    }
    out
}
