//! Line classification for the quiz markdown grammar.
//!
//! Pure, per-line recognition of which grammar construct a
//! right-trimmed input line begins. What a line *means* depends on the
//! parser's current mode; this module only says what it looks like.

/// The grammar construct one line begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# Title`: a new quiz; the title sits on the following line.
    Title,
    /// `## Quiz Type`: the type token sits on the following line.
    QuizType,
    /// `### Question`: starts a new question.
    Question,
    /// `### Rationale`: switches the open question to rationale text.
    Rationale,
    /// A checkbox line such as `- [x] An answer`.
    Option { is_correct: bool, text: &'a str },
    /// Anything else; routed by the parser's current mode.
    Content,
}

/// Classify one right-trimmed line. Marker matching is case-insensitive
/// and anchored at the start of the line.
pub fn classify(line: &str) -> LineKind<'_> {
    if starts_with_ignore_case(line, "# title") {
        LineKind::Title
    } else if starts_with_ignore_case(line, "## quiz type") {
        LineKind::QuizType
    } else if starts_with_ignore_case(line, "### question") {
        LineKind::Question
    } else if starts_with_ignore_case(line, "### rationale") {
        LineKind::Rationale
    } else if let Some((is_correct, text)) = parse_option_line(line) {
        LineKind::Option { is_correct, text }
    } else {
        LineKind::Content
    }
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Match `- [ ]` / `- [x]` checkbox lines. The bracket content must be
/// all whitespace (unchecked) or exactly `x` in either case (checked);
/// any other content makes the line ordinary content.
fn parse_option_line(line: &str) -> Option<(bool, &str)> {
    let rest = line.strip_prefix('-')?;
    let rest = rest.trim_start().strip_prefix('[')?;
    let (marker, text) = rest.split_once(']')?;
    let is_correct = if marker.chars().all(char::is_whitespace) {
        false
    } else if marker.eq_ignore_ascii_case("x") {
        true
    } else {
        return None;
    };
    Some((is_correct, text.trim()))
}
