//! Tests for the frame progress bar

#[cfg(test)]
mod tests {

    use spillgrid::io::progress::FrameProgress;

    // Tests ticks are counted even when the bar is hidden
    // Verified by skipping increments in quiet mode
    #[test]
    fn test_quiet_progress_counts_frames() {
        let progress = FrameProgress::new(3, true);
        progress.tick();
        progress.tick();
        progress.finish();

        assert_eq!(progress.position(), 2);
    }

    // Tests a visible bar tracks the same position
    // Verified by incrementing by the frame count
    #[test]
    fn test_visible_progress_counts_frames() {
        let progress = FrameProgress::new(2, false);
        progress.tick();

        assert_eq!(progress.position(), 1);
        progress.finish();
    }
}
