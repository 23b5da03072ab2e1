//! Stage spinner shown while a flow decodes, segments and compares

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Single-line spinner naming the current stage of a flow
pub struct StageSpinner {
    bar: ProgressBar,
}

impl StageSpinner {
    /// Start a spinner labelled with the flow name
    pub fn start(flow: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(flow);
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { bar }
    }

    /// Show the stage currently running
    pub fn stage(&self, message: &'static str) {
        self.bar.set_message(message);
    }

    /// Current stage message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
