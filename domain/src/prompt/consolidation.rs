//! Consolidated-rationale prompt.
//!
//! Builds the system/user message pair sent to the text-generation
//! service that folds a question's per-option rationales into one
//! paragraph. The question block is rendered with the same entity
//! helpers the round-trip writer uses, so the service sees the options
//! exactly as a reader would.

use crate::quiz::entities::Question;

const SYSTEM_PROMPT: &str = "You are an expert educational content writer. You write clear rationales for quiz questions.";

const INSTRUCTIONS: &str = "Given the following multiple-choice question and answer options, please generate a single, consolidated rationale that succinctly explains why the correct option is correct and the incorrect options are incorrect. The rationale should ideally have no more than one sentence per answer option, but it may have fewer. If you refer to answer options specifically in the rationale, you can do so by referring to the option letter in parentheses (e.g. \"ETL (option B) is not...\") after mentioning the concept it represents. Where letters are concerned, the first option is A, the second is B, etc. You do not necessarily need to specifically state which options are correct or incorrect, as the reader will see this information elsewhere. Do not use hyphens to precede or separate the rationale elements. The rationale should be a single paragraph.";

/// The system/user message pair for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidationPrompt {
    user: String,
}

impl ConsolidationPrompt {
    /// Build the prompt for a question from its stem and rendered
    /// option list, including existing per-option rationales when the
    /// question has any.
    pub fn for_question(question: &Question) -> Self {
        let question_block = format!("{}\n{}", question.stem(), question.options_markdown());
        let existing = question.rationales_markdown();
        let existing = (!existing.is_empty()).then_some(existing);
        Self::new(&question_block, existing.as_deref())
    }

    pub fn new(question_block: &str, existing_rationales: Option<&str>) -> Self {
        let mut user = format!(
            "{}\n\nHere is the question:\n\n{}\n",
            INSTRUCTIONS, question_block
        );
        if let Some(rationales) = existing_rationales {
            user.push_str("\n Existing Rationales (each corresponds to a question option):\n");
            user.push_str(rationales);
            user.push_str("\n\nYou should adapt these in the consolidated rationale you provide.");
        }
        Self { user }
    }

    pub fn system(&self) -> &str {
        SYSTEM_PROMPT
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::entities::{QuestionOption, QuestionRationale};

    fn question() -> Question {
        let mut question = Question::new();
        question.set_stem("Which store holds rows?");
        question.add_option(QuestionOption::new("A table", true));
        question.add_option(QuestionOption::new("A topic", false));
        question
    }

    #[test]
    fn test_prompt_contains_stem_and_rendered_options() {
        let prompt = ConsolidationPrompt::for_question(&question());
        assert!(prompt.user().contains("Which store holds rows?"));
        assert!(prompt.user().contains("- [x] A table"));
        assert!(prompt.user().contains("- [ ] A topic"));
        assert!(prompt.user().contains("The rationale should be a single paragraph."));
    }

    #[test]
    fn test_prompt_without_rationales_omits_existing_section() {
        let prompt = ConsolidationPrompt::for_question(&question());
        assert!(!prompt.user().contains("Existing Rationales"));
    }

    #[test]
    fn test_prompt_includes_existing_rationales() {
        let mut question = question();
        question.add_rationale(QuestionRationale::new("Tables store rows."));
        question.add_rationale(QuestionRationale::new("Topics are streams."));

        let prompt = ConsolidationPrompt::for_question(&question);
        assert!(prompt.user().contains("Existing Rationales"));
        assert!(prompt.user().contains("Tables store rows.\n\nTopics are streams."));
        assert!(prompt.user().contains("You should adapt these"));
    }

    #[test]
    fn test_system_prompt_sets_the_persona() {
        let prompt = ConsolidationPrompt::for_question(&question());
        assert!(prompt.system().contains("educational content writer"));
    }
}
