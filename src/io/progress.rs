//! Progress display for the frame loop

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Frames: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over rendered frames, silent when quiet
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Create a bar for `frames` frames; `quiet` hides it entirely
    pub fn new(frames: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(frames as u64);
            bar.set_style(FRAME_STYLE.clone());
            bar
        };
        Self { bar }
    }

    /// Record one finished frame
    pub fn tick(&self) {
        self.bar.inc(1);
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar, leaving the final state on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}
