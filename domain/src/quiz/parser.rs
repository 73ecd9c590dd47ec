//! Markdown parser for quiz documents.
//!
//! # Format
//! ```markdown
//! # Title
//! Data Fundamentals
//!
//! ## Quiz Type
//! Formative
//!
//! ### Question
//! Which of the following stores rows?
//! - [x] A table
//! - [ ] A topic
//! ### Rationale
//! A table stores rows.
//!
//! A topic is a stream, not a store.
//! ```
//!
//! Parsing is one forward pass over right-trimmed lines. The
//! [`QuizParser`] context carries the open quiz and question together
//! with line buffers for the stem, the current option, the current
//! rationale paragraph, and the question's raw markdown block. Markers
//! flush buffers at mode transitions; flushing an empty buffer is a
//! no-op, so defensive flushes at a transition point are safe. The last
//! open quiz and question are flushed at end of input.

use crate::quiz::answer_key::derive_answer_key;
use crate::quiz::entities::{Question, QuestionOption, QuestionRationale, Quiz};
use crate::quiz::line::{LineKind, classify};
use thiserror::Error;

/// Errors that abort a parse. No partial quiz list is produced.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line after a `## Quiz Type` marker is not a recognized type
    /// token. Carries the 0-based index of the marker line.
    #[error("invalid quiz type '{value}' at line {line}")]
    InvalidQuizType { line: usize, value: String },

    /// A marker that reads its value from the following line sits on
    /// the last line of the input. Carries the 0-based index of the
    /// marker line.
    #[error("missing value after marker at line {line}")]
    MissingMarkerValue { line: usize },
}

/// Parse a markdown document into its quizzes.
///
/// One document may contain multiple quizzes; order is preserved. Each
/// question's answer-key letters are derived before returning.
pub fn parse_quizzes(markdown: &str) -> Result<Vec<Quiz>, ParseError> {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut parser = QuizParser::new();

    for (index, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim_end();

        match classify(line) {
            LineKind::Title => {
                parser.flush_quiz();
                let title = value_line(&lines, index)?;
                parser.quiz = Some(Quiz::new(title));
                parser.mode = Mode::Idle;
            }
            LineKind::QuizType => {
                // Ignored when no quiz is open.
                if let Some(quiz) = parser.quiz.as_mut() {
                    let value = value_line(&lines, index)?;
                    let quiz_type = value.parse().map_err(|_| ParseError::InvalidQuizType {
                        line: index,
                        value: value.to_string(),
                    })?;
                    quiz.set_quiz_type(quiz_type);
                    parser.mode = Mode::Idle;
                }
            }
            LineKind::Question => {
                parser.start_question();
                parser.raw_lines.push(line.to_string());
            }
            LineKind::Rationale => {
                // Options may still be mid-buffer when the marker arrives.
                parser.flush_option();
                parser.mode = Mode::Rationales;
            }
            LineKind::Option { is_correct, text } => {
                if parser.question.is_some() {
                    parser.flush_option();
                    parser.mode = Mode::Options;
                    parser.option_lines.push(text.to_string());
                    parser.option_is_correct = is_correct;
                }
            }
            LineKind::Content => parser.content_line(line),
        }
    }

    parser.flush_quiz();

    let mut quizzes = parser.quizzes;
    for quiz in &mut quizzes {
        for question in quiz.questions_mut() {
            let letters = derive_answer_key(question);
            question.set_answer_key_letters(letters);
        }
    }

    Ok(quizzes)
}

/// The trimmed text of the line following a value-carrying marker.
fn value_line<'a>(lines: &[&'a str], marker_index: usize) -> Result<&'a str, ParseError> {
    lines
        .get(marker_index + 1)
        .map(|line| line.trim())
        .ok_or(ParseError::MissingMarkerValue { line: marker_index })
}

/// Which buffer plain content lines are routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Outside any question section.
    Idle,
    Stem,
    Options,
    Rationales,
}

/// Parser context: the open quiz and question plus the line buffers.
struct QuizParser {
    quizzes: Vec<Quiz>,
    quiz: Option<Quiz>,
    question: Option<Question>,
    mode: Mode,
    raw_lines: Vec<String>,
    stem_lines: Vec<String>,
    option_lines: Vec<String>,
    option_is_correct: bool,
    options: Vec<QuestionOption>,
    rationale_lines: Vec<String>,
    rationales: Vec<QuestionRationale>,
}

impl QuizParser {
    fn new() -> Self {
        Self {
            quizzes: Vec::new(),
            quiz: None,
            question: None,
            mode: Mode::Idle,
            raw_lines: Vec::new(),
            stem_lines: Vec::new(),
            option_lines: Vec::new(),
            option_is_correct: false,
            options: Vec::new(),
            rationale_lines: Vec::new(),
            rationales: Vec::new(),
        }
    }

    /// Route a plain content line into the buffer the current mode
    /// selects. Lines outside any question are dropped; lines inside a
    /// question always land in its raw markdown block, whatever the
    /// mode. Blank lines delimit paragraphs in rationale mode only;
    /// stems and options keep them verbatim.
    fn content_line(&mut self, line: &str) {
        if self.question.is_none() {
            return;
        }
        self.raw_lines.push(line.to_string());
        match self.mode {
            Mode::Stem => self.stem_lines.push(line.to_string()),
            Mode::Options => self.option_lines.push(line.to_string()),
            Mode::Rationales => {
                if line.trim().is_empty() {
                    self.flush_rationale();
                } else {
                    self.rationale_lines.push(line.to_string());
                }
            }
            Mode::Idle => {}
        }
    }

    fn start_question(&mut self) {
        self.flush_question();
        self.question = Some(Question::new());
        self.mode = Mode::Stem;
    }

    /// Materialize the buffered option, if any.
    fn flush_option(&mut self) {
        if self.option_lines.is_empty() {
            return;
        }
        let text = self.option_lines.join("\n").trim().to_string();
        self.options
            .push(QuestionOption::new(text, self.option_is_correct));
        self.option_lines.clear();
        self.option_is_correct = false;
    }

    /// Materialize the buffered rationale paragraph, if any.
    fn flush_rationale(&mut self) {
        if self.rationale_lines.is_empty() {
            return;
        }
        let text = self.rationale_lines.join("\n").trim().to_string();
        self.rationales.push(QuestionRationale::new(text));
        self.rationale_lines.clear();
    }

    /// Complete the open question and append it to the open quiz.
    ///
    /// A question without an open quiz is dropped, the same way lines
    /// outside any quiz are ignored. Buffers reset either way.
    fn flush_question(&mut self) {
        self.flush_option();
        self.flush_rationale();
        if let (Some(quiz), Some(mut question)) = (self.quiz.as_mut(), self.question.take()) {
            let stem = self.stem_lines.join("\n").trim().to_string();
            if !stem.is_empty() {
                question.set_stem(stem);
            }
            for option in self.options.drain(..) {
                question.add_option(option);
            }
            for rationale in self.rationales.drain(..) {
                question.add_rationale(rationale);
            }
            question.set_source_markdown(self.raw_lines.join("\n").trim().to_string());
            quiz.add_question(question);
        }
        self.reset_question_buffers();
    }

    fn reset_question_buffers(&mut self) {
        self.question = None;
        self.mode = Mode::Idle;
        self.raw_lines.clear();
        self.stem_lines.clear();
        self.option_lines.clear();
        self.option_is_correct = false;
        self.options.clear();
        self.rationale_lines.clear();
        self.rationales.clear();
    }

    /// Complete the open quiz, including its open question, and append
    /// it to the result list.
    fn flush_quiz(&mut self) {
        if self.quiz.is_some() {
            self.flush_question();
        }
        if let Some(quiz) = self.quiz.take() {
            self.quizzes.push(quiz);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::quiz_type::QuizType;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
# Title
Data Fundamentals

## Quiz Type
Formative

### Question
Which of the following stores rows?
- [x] A table
- [ ] A topic
### Rationale
A table stores rows.

A topic is a stream, not a store.

### Question
Which statements are true of indexes?
- [x] They speed up reads
- [ ] They speed up writes
- [x] They consume space
";

    #[test]
    fn test_parses_full_document() {
        let quizzes = parse_quizzes(SAMPLE).unwrap();
        assert_eq!(quizzes.len(), 1);

        let quiz = &quizzes[0];
        assert_eq!(quiz.title(), "Data Fundamentals");
        assert_eq!(quiz.quiz_type(), Some(QuizType::Formative));
        assert_eq!(quiz.questions().len(), 2);

        let first = &quiz.questions()[0];
        assert_eq!(first.stem(), "Which of the following stores rows?");
        assert_eq!(first.options().len(), 2);
        assert_eq!(first.options()[0].text(), "A table");
        assert!(first.options()[0].is_correct());
        assert!(!first.options()[1].is_correct());
        assert_eq!(first.rationales().len(), 2);
        assert_eq!(first.rationales()[0].text(), "A table stores rows.");
        assert_eq!(
            first.rationales()[1].text(),
            "A topic is a stream, not a store."
        );
    }

    #[test]
    fn test_answer_key_letters_are_derived() {
        let quizzes = parse_quizzes(SAMPLE).unwrap();
        let questions = quizzes[0].questions();
        assert_eq!(questions[0].answer_key_letters(), "A");
        assert_eq!(questions[1].answer_key_letters(), "A, C");
    }

    #[test]
    fn test_multi_line_option_is_one_option() {
        let input = "\
# Title
T

### Question
Pick one.
- [x] First line of the option
continues on a second line
- [ ] Another option
";
        let quizzes = parse_quizzes(input).unwrap();
        let options = quizzes[0].questions()[0].options();
        assert_eq!(options.len(), 2);
        assert_eq!(
            options[0].text(),
            "First line of the option\ncontinues on a second line"
        );
    }

    #[test]
    fn test_blank_lines_are_preserved_in_stems() {
        let input = "\
# Title
T

### Question
First stem paragraph.

Second stem paragraph.
- [x] Option
";
        let quizzes = parse_quizzes(input).unwrap();
        assert_eq!(
            quizzes[0].questions()[0].stem(),
            "First stem paragraph.\n\nSecond stem paragraph."
        );
    }

    #[test]
    fn test_rationale_paragraph_segmentation() {
        let input = "\
# Title
T

### Question
Stem
- [x] Option
### Rationale
First group line one.
First group line two.

Second group.
";
        let quizzes = parse_quizzes(input).unwrap();
        let rationales = quizzes[0].questions()[0].rationales();
        assert_eq!(rationales.len(), 2);
        assert_eq!(
            rationales[0].text(),
            "First group line one.\nFirst group line two."
        );
        assert_eq!(rationales[1].text(), "Second group.");
    }

    #[test]
    fn test_quiz_without_questions() {
        let input = "# Title\nEmpty Quiz\n\n## Quiz Type\nSummative\n";
        let quizzes = parse_quizzes(input).unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].title(), "Empty Quiz");
        assert_eq!(quizzes[0].quiz_type(), Some(QuizType::Summative));
        assert!(quizzes[0].questions().is_empty());
    }

    #[test]
    fn test_invalid_quiz_type_reports_marker_line() {
        let input = "# Title\nT\n\n## Quiz Type\nFoo\n";
        let err = parse_quizzes(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidQuizType {
                line: 3,
                value: "Foo".to_string()
            }
        );
    }

    #[test]
    fn test_quiz_type_marker_without_open_quiz_is_ignored() {
        let input = "## Quiz Type\nFoo\n\n# Title\nT\n";
        let quizzes = parse_quizzes(input).unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].quiz_type(), None);
    }

    #[test]
    fn test_title_marker_on_last_line_is_an_error() {
        let err = parse_quizzes("# Title").unwrap_err();
        assert_eq!(err, ParseError::MissingMarkerValue { line: 0 });
    }

    #[test]
    fn test_document_ending_on_option_line_keeps_it() {
        let input = "\
# Title
T

### Question
Stem
- [ ] First
- [x] Last option with no trailing newline";
        let quizzes = parse_quizzes(input).unwrap();
        let questions = quizzes[0].questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options().len(), 2);
        assert_eq!(
            questions[0].options()[1].text(),
            "Last option with no trailing newline"
        );
        assert_eq!(questions[0].answer_key_letters(), "B");
    }

    #[test]
    fn test_multiple_quizzes_in_one_document() {
        let input = "\
# Title
First

### Question
Stem one
- [x] Yes

# Title
Second

### Question
Stem two
- [ ] No
- [x] Yes
";
        let quizzes = parse_quizzes(input).unwrap();
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].title(), "First");
        assert_eq!(quizzes[0].questions().len(), 1);
        assert_eq!(quizzes[1].title(), "Second");
        assert_eq!(quizzes[1].questions().len(), 1);
        assert_eq!(quizzes[1].questions()[0].answer_key_letters(), "B");
    }

    #[test]
    fn test_option_line_outside_question_is_dropped() {
        let input = "# Title\nT\n- [x] stray option\n\n### Question\nStem\n- [ ] real\n";
        let quizzes = parse_quizzes(input).unwrap();
        let questions = quizzes[0].questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options().len(), 1);
        assert_eq!(questions[0].options()[0].text(), "real");
    }

    #[test]
    fn test_source_markdown_keeps_marker_and_content_lines() {
        let quizzes = parse_quizzes(SAMPLE).unwrap();
        let source = quizzes[0].questions()[0].source_markdown();
        assert!(source.starts_with("### Question"));
        assert!(source.contains("Which of the following stores rows?"));
        assert!(source.contains("A table stores rows."));
    }

    #[test]
    fn test_empty_document_yields_no_quizzes() {
        assert_eq!(parse_quizzes("").unwrap(), Vec::new());
        assert_eq!(parse_quizzes("\n\nplain prose\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_trailing_whitespace_on_markers_is_ignored() {
        let input = "# Title   \nT\n\n### Question  \nStem\n- [x] Option  \n";
        let quizzes = parse_quizzes(input).unwrap();
        assert_eq!(quizzes[0].questions().len(), 1);
        assert_eq!(quizzes[0].questions()[0].options()[0].text(), "Option");
    }
}
