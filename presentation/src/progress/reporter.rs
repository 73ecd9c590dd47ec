//! Progress reporting for rationale generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quizkey_application::ConsolidationProgress;
use std::sync::Mutex;

/// Reports per-question progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    total: u64,
}

impl ProgressReporter {
    /// `total` is the number of questions across all quizzes.
    pub fn new(total: usize) -> Self {
        Self {
            bar: Mutex::new(None),
            total: total as u64,
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl ConsolidationProgress for ProgressReporter {
    fn on_question_start(
        &self,
        quiz_index: usize,
        quiz_count: usize,
        question_index: usize,
        question_count: usize,
    ) {
        let mut guard = self.bar.lock().unwrap();
        let bar = guard.get_or_insert_with(|| {
            let bar = ProgressBar::new(self.total);
            bar.set_style(Self::bar_style());
            bar.set_prefix("Generating rationales");
            bar
        });
        bar.set_message(format!(
            "quiz {}/{} question {}/{}",
            quiz_index + 1,
            quiz_count,
            question_index + 1,
            question_count
        ));
    }

    fn on_question_complete(&self, _quiz_index: usize, _question_index: usize) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.inc(1);
            if bar.position() >= self.total {
                bar.finish_with_message(format!("{}", "done".green()));
            }
        }
    }
}
