use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

const BAR_TEMPLATE: &str = "{bar:30.cyan/blue} {pos}/{len} threads {msg}";

/// Progress indicator for the mark-as-read pass. Drawn on stderr, hidden when
/// stderr is not a terminal.
pub struct MarkProgress {
    bar: ProgressBar,
}

impl MarkProgress {
    pub fn new(total: usize) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn advance(&self, thread_id: u64) {
        self.bar.set_message(format!("#{}", thread_id));
        self.bar.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_still_counts() {
        let progress = MarkProgress::hidden();
        progress.advance(1);
        progress.advance(2);
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
