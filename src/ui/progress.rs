use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports entries translated so far.
///
/// Shows a spinner with a running count on interactive terminals and prints
/// a milestone line every [`Progress::MILESTONE`] entries. Hidden progress
/// reports nothing, which is what tests and quiet mode use.
pub struct Progress {
    progress_bar: ProgressBar,
    translated: usize,
}

impl Progress {
    /// Entries between two milestone lines.
    pub const MILESTONE: usize = 100;

    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            progress_bar,
            translated: 0,
        }
    }

    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
            translated: 0,
        }
    }

    /// Records one translated entry.
    pub fn entry_translated(&mut self) {
        self.translated += 1;
        self.progress_bar
            .set_message(format!("Translating... {} entries", self.translated));

        if self.translated % Self::MILESTONE == 0 {
            let translated = self.translated;
            self.progress_bar.suspend(|| {
                crate::status!("Translated {translated} entries.");
            });
        }
    }

    /// Prints a status line without tearing the spinner.
    pub fn note(&self, message: &str) {
        self.progress_bar.suspend(|| {
            crate::status!("{message}");
        });
    }

    pub const fn translated(&self) -> usize {
        self.translated
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_counts_entries() {
        let mut progress = Progress::hidden();
        for _ in 0..Progress::MILESTONE + 1 {
            progress.entry_translated();
        }
        assert_eq!(progress.translated(), 101);
        progress.finish();
    }
}
