//! Consolidate rationales use case.
//!
//! Walks every question of every quiz in source order and asks the
//! rationale gateway for one consolidated paragraph per question,
//! strictly sequentially with a fixed pause between calls. A failed
//! call aborts the remaining run; questions already processed keep
//! their generated text.

use crate::config::GeneratorParams;
use crate::ports::progress::ConsolidationProgress;
use crate::ports::rationale_gateway::{GatewayError, RationaleGateway};
use quizkey_domain::{ConsolidationPrompt, Quiz};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating consolidated rationales.
#[derive(Error, Debug)]
pub enum ConsolidateError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Empty rationale from generator")]
    EmptyRationale,
}

/// Use case for filling in each question's consolidated rationale.
pub struct ConsolidateRationalesUseCase {
    gateway: Arc<dyn RationaleGateway>,
    pacing: Duration,
}

impl ConsolidateRationalesUseCase {
    pub fn new(gateway: Arc<dyn RationaleGateway>) -> Self {
        Self {
            gateway,
            pacing: GeneratorParams::default().pacing,
        }
    }

    /// Override the pause inserted after each gateway call.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Generate and store a consolidated rationale for every question.
    pub async fn execute(
        &self,
        quizzes: &mut [Quiz],
        progress: &dyn ConsolidationProgress,
    ) -> Result<(), ConsolidateError> {
        let quiz_count = quizzes.len();
        for (quiz_index, quiz) in quizzes.iter_mut().enumerate() {
            let question_count = quiz.questions().len();
            info!(
                "Generating consolidated rationales for quiz {} of {} ({} questions)",
                quiz_index + 1,
                quiz_count,
                question_count
            );

            for (question_index, question) in quiz.questions_mut().iter_mut().enumerate() {
                progress.on_question_start(quiz_index, quiz_count, question_index, question_count);

                let prompt = ConsolidationPrompt::for_question(question);
                debug!(
                    "Question {}: prompt is {} bytes",
                    question_index + 1,
                    prompt.user().len()
                );

                let reply = self.gateway.consolidate(&prompt).await?;
                // The answer-key report renders each rationale on one line.
                let rationale = reply.replace("\n\n", "\n");
                if rationale.trim().is_empty() {
                    return Err(ConsolidateError::EmptyRationale);
                }
                question.set_consolidated_rationale(rationale);

                progress.on_question_complete(quiz_index, question_index);

                // Pause between API calls to respect provider rate limits.
                tokio::time::sleep(self.pacing).await;
            }
        }
        Ok(())
    }
}
