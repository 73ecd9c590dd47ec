//! Progress notification port
//!
//! Defines the interface for reporting progress while consolidated
//! rationales are generated. Implementations live in the presentation
//! layer.

/// Callback for progress updates during rationale generation
pub trait ConsolidationProgress: Send + Sync {
    /// Called before a question's rationale is requested. Indexes are
    /// 0-based; counts are the totals for the document and the quiz.
    fn on_question_start(
        &self,
        quiz_index: usize,
        quiz_count: usize,
        question_index: usize,
        question_count: usize,
    );

    /// Called after a question's consolidated rationale is stored.
    fn on_question_complete(&self, quiz_index: usize, question_index: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConsolidationProgress for NoProgress {
    fn on_question_start(
        &self,
        _quiz_index: usize,
        _quiz_count: usize,
        _question_index: usize,
        _question_count: usize,
    ) {
    }

    fn on_question_complete(&self, _quiz_index: usize, _question_index: usize) {}
}
