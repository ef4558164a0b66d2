const TEST_AUDIO_DIR: &str = "test-render";

/// Scratch directory for one test, wiped before use so stale files from
/// an earlier run cannot satisfy an assertion.
pub fn scratch_dir(label: &str) -> String {
    let dir = format!("{}/{}", TEST_AUDIO_DIR, label);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

pub fn wav_path(dir: &str, name: &str) -> String {
    format!("{}/{}.wav", dir, name)
}
