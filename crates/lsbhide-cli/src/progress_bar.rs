use std::io::{self, Write};

use lsbhide_core::{readable_size, ProgressObserver};

const CELLS: u64 = 80;

/// Draws a one line progress bar on stderr, like
/// `[■■■■■-----] 1.00KB / 2.00KB (50%)`.
#[derive(Debug, Default)]
pub struct ProgressBar {
    filled: Option<u64>,
    total: u64,
    drawn: bool,
}

impl ProgressBar {
    /// Moves the cursor below the bar, if one was drawn.
    pub fn finish(&mut self) {
        if self.drawn {
            eprintln!();
            self.drawn = false;
        }
    }
}

impl ProgressObserver for ProgressBar {
    fn on_progress(&mut self, done_bytes: u64, total_bytes: u64) {
        let filled = cells_filled(done_bytes, total_bytes);
        if self.filled == Some(filled) && self.total == total_bytes && done_bytes < total_bytes {
            return;
        }
        self.filled = Some(filled);
        self.total = total_bytes;

        let mut stderr = io::stderr().lock();
        // progress output is best effort
        let _ = write!(stderr, "\r{}", render(done_bytes, total_bytes));
        let _ = stderr.flush();
        self.drawn = true;
    }
}

fn cells_filled(done: u64, total: u64) -> u64 {
    if total == 0 {
        return CELLS;
    }
    (done.min(total) as u128 * CELLS as u128 / total as u128) as u64
}

fn render(done: u64, total: u64) -> String {
    let filled = cells_filled(done, total) as usize;
    let percent = if total == 0 {
        100
    } else {
        (done.min(total) as u128 * 100 / total as u128) as u64
    };

    format!(
        "[{}{}] {} / {} ({percent}%)",
        "■".repeat(filled),
        "-".repeat(CELLS as usize - filled),
        readable_size(done),
        readable_size(total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_an_empty_bar() {
        let bar = render(0, 2048);
        assert!(bar.starts_with(&format!("[{}]", "-".repeat(80))));
        assert!(bar.ends_with("(0%)"));
    }

    #[test]
    fn should_render_a_half_filled_bar() {
        let bar = render(1024, 2048);
        assert!(bar.starts_with(&format!("[{}{}]", "■".repeat(40), "-".repeat(40))));
        assert!(bar.ends_with("(50%)"));
    }

    #[test]
    fn should_render_a_full_bar_for_nothing_to_do() {
        let bar = render(0, 0);
        assert!(bar.starts_with(&format!("[{}]", "■".repeat(80))));
        assert!(bar.ends_with("(100%)"));
    }

    #[test]
    fn should_never_overflow_the_bar() {
        assert_eq!(cells_filled(5000, 10), 80);
        assert_eq!(cells_filled(u64::MAX, u64::MAX), 80);
    }
}
