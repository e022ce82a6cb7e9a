/*!
 * Common test utilities for the pgosync test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use pgosync::pgo::{Phoneme, PgoDocument, Segment, Voice, Word};

/// Routes library log output through the test harness
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// PGO text for a two-segment narrator track at 24 fps
pub const SAMPLE_PGO: &str = "\
PGO 1.0
dialogue.wav
24
200
1
\tNarrator
\thello world. goodbye
\t2
\t\thello world
\t\t0
\t\t10
\t\t2
\t\t\thello 0 4 2
\t\t\t\t0 HH
\t\t\t\t2 OW
\t\t\tworld 5 10 3
\t\t\t\t5 W
\t\t\t\t7 ER
\t\t\t\t9 D
\t\tgoodbye
\t\t11
\t\t20
\t\t1
\t\t\tgoodbye 11 20 2
\t\t\t\t11 G
\t\t\t\t15 B
";

/// SRT track matching SAMPLE_PGO's segments
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:02,500
hello world

2
00:00:03,000 --> 00:00:04,000
goodbye
";

/// Creates the sample PGO file
pub fn create_test_pgo(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_PGO)
}

/// Creates the sample SRT file
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// Builds a segment whose words each carry `phonemes_per_word` phonemes
pub fn build_segment(text: &str, words: usize, phonemes_per_word: usize) -> Segment {
    Segment::new(text, 0, 0).with_words(
        (0..words)
            .map(|w| {
                Word::new(format!("w{}", w), 0, 0).with_phonemes(
                    (0..phonemes_per_word)
                        .map(|p| Phoneme::new(0, format!("P{}", p)))
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Wraps segments into a single-voice document
pub fn build_document(fps: i64, segments: Vec<Segment>) -> PgoDocument {
    let mut voice = Voice::new("Narrator", "");
    voice.segments = segments;
    PgoDocument {
        version: "PGO 1.0".to_string(),
        audio_file: "test.wav".to_string(),
        fps,
        frame_count: 0,
        voices: vec![voice],
    }
}
