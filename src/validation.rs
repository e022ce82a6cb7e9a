/*!
 * Frame layout validation for PGO documents.
 *
 * Checks that, per segment:
 * - The span is not degenerate (end after start)
 * - Words tile the segment with no gap or overlap, from its start frame up
 *   to the frame before its end frame
 * - Phonemes sit inside their word, in order
 *
 * Issues are reported, never fixed. Unmatched segments keep whatever the
 * source file had, so issues there are expected and only informative.
 */

use std::fmt;

use log::warn;

use crate::pgo::{PgoDocument, Segment};

/// Where an issue was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocation {
    pub voice: usize,
    pub segment: usize,
    /// Word index, when the issue is word-level or below
    pub word: Option<usize>,
}

/// Types of layout issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIssue {
    /// Segment end frame is not after its start frame
    DegenerateSpan {
        at: IssueLocation,
        start_frame: i64,
        end_frame: i64,
    },
    /// First word does not start on the segment start
    MisalignedStart {
        at: IssueLocation,
        expected: i64,
        actual: i64,
    },
    /// Last word does not end on the frame before the segment end
    MisalignedEnd {
        at: IssueLocation,
        expected: i64,
        actual: i64,
    },
    /// Word does not begin right after the previous one ends
    WordDiscontinuity {
        at: IssueLocation,
        expected: i64,
        actual: i64,
    },
    /// Phoneme anchored outside its word
    PhonemeOutOfBounds {
        at: IssueLocation,
        frame: i64,
    },
    /// Phoneme anchored before the previous one
    PhonemeOutOfOrder {
        at: IssueLocation,
        frame: i64,
        previous: i64,
    },
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::DegenerateSpan { at, start_frame, end_frame } => write!(
                f,
                "Voice {} segment {}: degenerate span {}-{}",
                at.voice, at.segment, start_frame, end_frame
            ),
            LayoutIssue::MisalignedStart { at, expected, actual } => write!(
                f,
                "Voice {} segment {}: first word starts at {} instead of {}",
                at.voice, at.segment, actual, expected
            ),
            LayoutIssue::MisalignedEnd { at, expected, actual } => write!(
                f,
                "Voice {} segment {}: last word ends at {} instead of {}",
                at.voice, at.segment, actual, expected
            ),
            LayoutIssue::WordDiscontinuity { at, expected, actual } => write!(
                f,
                "Voice {} segment {} word {}: starts at {} instead of {}",
                at.voice,
                at.segment,
                at.word.unwrap_or_default(),
                actual,
                expected
            ),
            LayoutIssue::PhonemeOutOfBounds { at, frame } => write!(
                f,
                "Voice {} segment {} word {}: phoneme at frame {} lies outside the word",
                at.voice,
                at.segment,
                at.word.unwrap_or_default(),
                frame
            ),
            LayoutIssue::PhonemeOutOfOrder { at, frame, previous } => write!(
                f,
                "Voice {} segment {} word {}: phoneme at frame {} comes after one at {}",
                at.voice,
                at.segment,
                at.word.unwrap_or_default(),
                frame,
                previous
            ),
        }
    }
}

/// Validate every segment of the document
pub fn validate_document(document: &PgoDocument) -> Vec<LayoutIssue> {
    document
        .voices
        .iter()
        .enumerate()
        .flat_map(|(voice, v)| {
            v.segments
                .iter()
                .enumerate()
                .flat_map(move |(segment, s)| validate_segment(s, voice, segment))
        })
        .collect()
}

/// Validate one segment's words and phonemes
pub fn validate_segment(segment: &Segment, voice: usize, index: usize) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();
    let at = |word: Option<usize>| IssueLocation {
        voice,
        segment: index,
        word,
    };

    if segment.end_frame <= segment.start_frame {
        issues.push(LayoutIssue::DegenerateSpan {
            at: at(None),
            start_frame: segment.start_frame,
            end_frame: segment.end_frame,
        });
        // Tiling checks are meaningless on an empty or reversed span
        return issues;
    }

    if let Some(first) = segment.words.first() {
        if first.start_frame != segment.start_frame {
            issues.push(LayoutIssue::MisalignedStart {
                at: at(Some(0)),
                expected: segment.start_frame,
                actual: first.start_frame,
            });
        }
    }

    // Word spans are exclusive of the segment end frame
    if let Some(last) = segment.words.last() {
        let expected = segment.end_frame - 1;
        if last.end_frame != expected {
            issues.push(LayoutIssue::MisalignedEnd {
                at: at(Some(segment.words.len() - 1)),
                expected,
                actual: last.end_frame,
            });
        }
    }

    for (i, pair) in segment.words.windows(2).enumerate() {
        let expected = pair[0].end_frame + 1;
        if pair[1].start_frame != expected {
            issues.push(LayoutIssue::WordDiscontinuity {
                at: at(Some(i + 1)),
                expected,
                actual: pair[1].start_frame,
            });
        }
    }

    for (w, word) in segment.words.iter().enumerate() {
        let mut previous: Option<i64> = None;
        for phoneme in &word.phonemes {
            if phoneme.frame < word.start_frame || phoneme.frame > word.end_frame {
                issues.push(LayoutIssue::PhonemeOutOfBounds {
                    at: at(Some(w)),
                    frame: phoneme.frame,
                });
            }
            if let Some(prev) = previous.filter(|prev| phoneme.frame < *prev) {
                issues.push(LayoutIssue::PhonemeOutOfOrder {
                    at: at(Some(w)),
                    frame: phoneme.frame,
                    previous: prev,
                });
            }
            previous = Some(phoneme.frame);
        }
    }

    issues
}

/// Validate and log every issue as a warning; returns the issue count
pub fn log_issues(document: &PgoDocument) -> usize {
    let issues = validate_document(document);
    for issue in &issues {
        warn!("{}", issue);
    }
    issues.len()
}
