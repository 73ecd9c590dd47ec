//! Quiz entities.
//!
//! Passive containers built by the parser and consumed by the
//! serializers. A quiz exclusively owns its questions; a question
//! exclusively owns its options and rationales. Child order is source
//! order and is significant: an option's position determines the letter
//! it gets in answer keys.

use crate::quiz::quiz_type::QuizType;
use serde::{Deserialize, Serialize};

/// A titled, optionally typed collection of ordered questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    title: String,
    quiz_type: Option<QuizType>,
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            quiz_type: None,
            questions: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quiz_type(&self) -> Option<QuizType> {
        self.quiz_type
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    pub fn set_quiz_type(&mut self, quiz_type: QuizType) {
        self.quiz_type = Some(quiz_type);
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }
}

/// One question: a stem, its answer options, and free-text rationales.
///
/// Options and rationales are two independent ordered sequences. The
/// grammar does not tie a rationale to a particular option and their
/// counts may differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    stem: String,
    options: Vec<QuestionOption>,
    rationales: Vec<QuestionRationale>,
    source_markdown: String,
    answer_key_letters: String,
    consolidated_rationale: String,
}

impl Question {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    pub fn rationales(&self) -> &[QuestionRationale] {
        &self.rationales
    }

    /// The question's block of source markdown, kept for diagnostics.
    pub fn source_markdown(&self) -> &str {
        &self.source_markdown
    }

    /// Letter-coded correct options, derived after parsing.
    pub fn answer_key_letters(&self) -> &str {
        &self.answer_key_letters
    }

    /// Single-paragraph rationale produced by the generator; empty
    /// until one has been generated.
    pub fn consolidated_rationale(&self) -> &str {
        &self.consolidated_rationale
    }

    pub fn set_stem(&mut self, stem: impl Into<String>) {
        self.stem = stem.into();
    }

    pub fn add_option(&mut self, option: QuestionOption) {
        self.options.push(option);
    }

    pub fn add_rationale(&mut self, rationale: QuestionRationale) {
        self.rationales.push(rationale);
    }

    pub fn set_source_markdown(&mut self, markdown: impl Into<String>) {
        self.source_markdown = markdown.into();
    }

    pub fn set_answer_key_letters(&mut self, letters: impl Into<String>) {
        self.answer_key_letters = letters.into();
    }

    pub fn set_consolidated_rationale(&mut self, rationale: impl Into<String>) {
        self.consolidated_rationale = rationale.into();
    }

    /// Render the option list back to checkbox markdown, marking
    /// correct options with `[x]`. Continuation lines of multi-line
    /// options are indented by two spaces.
    pub fn options_markdown(&self) -> String {
        let mut lines = Vec::new();
        for option in &self.options {
            let check_mark = if option.is_correct() { "[x]" } else { "[ ]" };
            let mut text_lines = option.text().trim().lines();
            match text_lines.next() {
                Some(first) => {
                    lines.push(format!("- {} {}", check_mark, first));
                    lines.extend(text_lines.map(|line| format!("  {}", line)));
                }
                None => lines.push(format!("- {}", check_mark)),
            }
        }
        lines.join("\n")
    }

    /// Render the rationales as blank-line-delimited paragraphs, in
    /// order, skipping empty entries.
    pub fn rationales_markdown(&self) -> String {
        self.rationales
            .iter()
            .map(|rationale| rationale.text().trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// One answer choice with its correctness flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    text: String,
    is_correct: bool,
}

impl QuestionOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A free-text explanation paragraph attached to a question as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRationale {
    text: String,
}

impl QuestionRationale {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
