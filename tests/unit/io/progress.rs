//! Tests for the stage spinner

#[cfg(test)]
mod tests {
    use spectrafill::io::progress::StageProgress;

    // Tests a disabled spinner accepts stage updates silently
    // Verified by creating the bar regardless of the flag
    #[test]
    fn test_disabled_progress() {
        let progress = StageProgress::new(false);
        assert!(!progress.is_enabled());
        progress.start_stage("reorder", "64 samples");
        progress.finish();
    }

    // Tests an enabled spinner can run through stages and finish twice
    // Verified by panicking on a second finish
    #[test]
    fn test_enabled_progress_lifecycle() {
        let progress = StageProgress::new(true);
        assert!(progress.is_enabled());
        progress.start_stage("palette", String::from("16 random samples"));
        progress.start_stage("fill", "4x4 spiral");
        progress.finish();
        progress.finish();
    }
}
