//! Answer-key derivation.

use crate::quiz::entities::Question;

/// Compute the letter-coded list of correct options for a question.
///
/// Option position determines the letter (0 → A, 1 → B, …); letters
/// are joined with `", "`. A question with no correct options yields an
/// empty string rather than an error, though an empty result usually
/// signals a malformed source question.
///
/// Works strictly on option order; rationales are never consulted.
pub fn derive_answer_key(question: &Question) -> String {
    question
        .options()
        .iter()
        .enumerate()
        .filter(|(_, option)| option.is_correct())
        .map(|(index, _)| index_to_letter(index))
        .collect::<Vec<_>>()
        .join(", ")
}

fn index_to_letter(index: usize) -> String {
    char::from_u32('A' as u32 + index as u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}
