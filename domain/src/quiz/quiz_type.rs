//! Quiz type classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The pedagogical category of a quiz.
///
/// Read from the line following a `## Quiz Type` marker. Only the two
/// literal tokens are recognized; anything else fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizType {
    Formative,
    Summative,
}

/// A quiz-type token that matches neither recognized value.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized quiz type '{0}'")]
pub struct UnknownQuizType(pub String);

impl FromStr for QuizType {
    type Err = UnknownQuizType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Formative" => Ok(QuizType::Formative),
            "Summative" => Ok(QuizType::Summative),
            other => Err(UnknownQuizType(other.to_string())),
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            QuizType::Formative => "Formative",
            QuizType::Summative => "Summative",
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_tokens() {
        assert_eq!("Formative".parse(), Ok(QuizType::Formative));
        assert_eq!("Summative".parse(), Ok(QuizType::Summative));
    }

    #[test]
    fn test_parse_is_exact() {
        // Marker matching is case-insensitive, the type token is not.
        assert!("formative".parse::<QuizType>().is_err());
        assert!("Diagnostic".parse::<QuizType>().is_err());
        assert!("".parse::<QuizType>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for quiz_type in [QuizType::Formative, QuizType::Summative] {
            assert_eq!(quiz_type.to_string().parse(), Ok(quiz_type));
        }
    }
}
