use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::errors::SrtError;
use crate::file_utils::FileManager;
use crate::timecode;

// @module: SRT subtitle track decoding

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq)]
pub struct SrtCue {
    // @field: Start time in seconds
    pub start_time: f64,

    // @field: End time in seconds
    pub end_time: f64,

    // @field: Text lines joined with single spaces
    pub text: String,
}

impl SrtCue {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        SrtCue {
            start_time,
            end_time,
            text: text.into(),
        }
    }
}

impl fmt::Display for SrtCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} --> {} {}",
            timecode::format_timestamp(self.start_time),
            timecode::format_timestamp(self.end_time),
            self.text
        )
    }
}

/// Subtitle cues in file order
#[derive(Debug, Clone, Default)]
pub struct SrtDocument {
    pub cues: Vec<SrtCue>,

    /// Blocks dropped for having fewer than three lines
    pub skipped_blocks: usize,
}

impl SrtDocument {
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

/// Decode SRT content.
///
/// Blocks are separated by empty lines. A block needs a sequence line, a
/// time range line and at least one text line; shorter blocks are skipped.
/// A malformed time range in a complete block is fatal.
pub fn decode(content: &str) -> Result<SrtDocument, SrtError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut document = SrtDocument::default();

    for (index, block) in split_blocks(content).iter().enumerate() {
        if block.len() < 3 {
            debug!("Skipping subtitle block {} with only {} line(s)", index + 1, block.len());
            document.skipped_blocks += 1;
            continue;
        }

        // The sequence number on the first line is not used
        let (start_time, end_time) = timecode::parse_time_range(block[1])
            .map_err(|source| SrtError::Timestamp {
                block: index + 1,
                source,
            })?;
        let text = block[2..].join(" ");

        document.cues.push(SrtCue::new(start_time, end_time, text));
    }

    debug!(
        "Decoded SRT: {} cue(s), {} skipped block(s)",
        document.cues.len(),
        document.skipped_blocks
    );

    Ok(document)
}

/// Read and decode an SRT file
pub fn load<P: AsRef<Path>>(path: P) -> Result<SrtDocument> {
    let path = path.as_ref();
    let content = FileManager::read_to_string(path)?;
    decode(&content).with_context(|| format!("Failed to parse SRT file: {}", path.display()))
}

fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
