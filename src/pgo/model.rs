/*!
 * In-memory PGO document tree.
 *
 * The document owns its voices, each voice owns its segments, and so on
 * down to phonemes. Traversal is always top-down, so nothing holds a
 * reference back to its parent.
 */

/// A single articulation event anchored at one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phoneme {
    /// Anchor frame
    pub frame: i64,

    /// Phoneme symbol
    pub symbol: String,
}

impl Phoneme {
    pub fn new(frame: i64, symbol: impl Into<String>) -> Self {
        Self {
            frame,
            symbol: symbol.into(),
        }
    }
}

/// A word with an inclusive frame range and its phonemes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,

    /// First frame covered
    pub start_frame: i64,

    /// Last frame covered (inclusive)
    pub end_frame: i64,

    pub phonemes: Vec<Phoneme>,
}

impl Word {
    pub fn new(text: impl Into<String>, start_frame: i64, end_frame: i64) -> Self {
        Self {
            text: text.into(),
            start_frame,
            end_frame,
            phonemes: Vec::new(),
        }
    }

    /// Builder-style helper used by tests and benches
    pub fn with_phonemes(mut self, phonemes: Vec<Phoneme>) -> Self {
        self.phonemes = phonemes;
        self
    }
}

/// A spoken phrase, matched 1:1 against a subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub start_frame: i64,
    pub end_frame: i64,
    pub words: Vec<Word>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start_frame: i64, end_frame: i64) -> Self {
        Self {
            text: text.into(),
            start_frame,
            end_frame,
            words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }
}

/// A named speaker track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub full_text: String,
    pub segments: Vec<Segment>,
}

impl Voice {
    pub fn new(name: impl Into<String>, full_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_text: full_text.into(),
            segments: Vec::new(),
        }
    }
}

/// Root of the lip-sync timing tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PgoDocument {
    /// Format version string from the header
    pub version: String,

    /// Audio file name the timings belong to
    pub audio_file: String,

    /// Frames per second
    pub fps: i64,

    /// Total frame count declared by the header
    pub frame_count: i64,

    pub voices: Vec<Voice>,
}

impl PgoDocument {
    /// Total number of segments across all voices
    pub fn segment_count(&self) -> usize {
        self.voices.iter().map(|v| v.segments.len()).sum()
    }

    /// Total number of words across all segments
    pub fn word_count(&self) -> usize {
        self.voices
            .iter()
            .flat_map(|v| v.segments.iter())
            .map(|s| s.words.len())
            .sum()
    }

    /// Total number of phonemes across all words
    pub fn phoneme_count(&self) -> usize {
        self.voices
            .iter()
            .flat_map(|v| v.segments.iter())
            .flat_map(|s| s.words.iter())
            .map(|w| w.phonemes.len())
            .sum()
    }
}
