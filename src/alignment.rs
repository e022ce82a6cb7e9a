/*!
 * Frame alignment engine.
 *
 * Matches every PGO segment, in document order, against the first subtitle
 * cue with identical text that has not been consumed yet. A matched segment
 * takes the cue's frame bounds, and its words and phonemes are re-sliced
 * across the new range. Unmatched segments are left untouched.
 *
 * Remainder frames from integer division always go to the earliest
 * children, one extra frame each.
 */

use std::fmt;

use log::{debug, info, warn};

use crate::pgo::{PgoDocument, Segment, Word};
use crate::srt::SrtCue;
use crate::timecode;

/// A segment that was moved onto a cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentMatch {
    /// Voice index in the document
    pub voice: usize,
    /// Segment index within the voice
    pub segment: usize,
    /// Index of the consumed cue
    pub cue: usize,
    pub start_frame: i64,
    pub end_frame: i64,
}

/// A segment with no unused cue carrying the same text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedSegment {
    pub voice: usize,
    pub voice_name: String,
    pub segment: usize,
    pub text: String,
}

impl fmt::Display for UnmatchedSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Text not found in SRT or already used: {}", self.text)
    }
}

/// Outcome of one alignment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    pub matched: Vec<SegmentMatch>,
    pub unmatched: Vec<UnmatchedSegment>,
}

impl AlignmentReport {
    /// Number of segments visited
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// True when every segment found a cue
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Alignment state over one subtitle track.
///
/// The cues are borrowed read-only; which of them have been consumed is
/// tracked here, so running several passes with the same aligner never
/// hands out a cue twice.
pub struct Aligner<'a> {
    cues: &'a [SrtCue],
    consumed: Vec<bool>,
    fps: i64,
}

impl<'a> Aligner<'a> {
    pub fn new(cues: &'a [SrtCue], fps: i64) -> Self {
        Self {
            cues,
            consumed: vec![false; cues.len()],
            fps,
        }
    }

    pub fn fps(&self) -> i64 {
        self.fps
    }

    /// Whether the cue at `index` has been consumed
    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed.get(index).copied().unwrap_or(false)
    }

    /// Number of cues consumed so far
    pub fn consumed_count(&self) -> usize {
        self.consumed.iter().filter(|used| **used).count()
    }

    /// Run one pass over every voice and segment of `document`
    pub fn align_document(&mut self, document: &mut PgoDocument) -> AlignmentReport {
        let mut report = AlignmentReport::default();

        for (voice_index, voice) in document.voices.iter_mut().enumerate() {
            for (segment_index, segment) in voice.segments.iter_mut().enumerate() {
                match self.align_segment(segment) {
                    Some(cue) => {
                        debug!(
                            "Matched segment '{}' ({}#{}) to cue {}: frames {}-{}",
                            segment.text,
                            voice.name,
                            segment_index,
                            cue + 1,
                            segment.start_frame,
                            segment.end_frame
                        );
                        report.matched.push(SegmentMatch {
                            voice: voice_index,
                            segment: segment_index,
                            cue,
                            start_frame: segment.start_frame,
                            end_frame: segment.end_frame,
                        });
                    }
                    None => {
                        warn!(
                            "No unused subtitle cue for segment '{}' in voice '{}'",
                            segment.text, voice.name
                        );
                        report.unmatched.push(UnmatchedSegment {
                            voice: voice_index,
                            voice_name: voice.name.clone(),
                            segment: segment_index,
                            text: segment.text.clone(),
                        });
                    }
                }
            }
        }

        info!(
            "Aligned {}/{} segment(s) against {} cue(s)",
            report.matched.len(),
            report.total(),
            self.cues.len()
        );

        report
    }

    /// Match one segment and rewrite its frames; returns the consumed cue index
    pub fn align_segment(&mut self, segment: &mut Segment) -> Option<usize> {
        let index = self.claim(&segment.text)?;
        let cue = &self.cues[index];

        segment.start_frame = timecode::seconds_to_frame(cue.start_time, self.fps);
        segment.end_frame = timecode::seconds_to_frame(cue.end_time, self.fps);

        if segment.end_frame <= segment.start_frame {
            warn!(
                "Cue {} gives segment '{}' a degenerate span {}-{}",
                index + 1,
                segment.text,
                segment.start_frame,
                segment.end_frame
            );
        }

        redistribute_words(segment);
        for word in &mut segment.words {
            redistribute_phonemes(word);
        }

        Some(index)
    }

    /// First unconsumed cue with exactly `text`, marked consumed
    fn claim(&mut self, text: &str) -> Option<usize> {
        let index = self
            .cues
            .iter()
            .zip(&self.consumed)
            .position(|(cue, used)| !used && cue.text == text)?;
        self.consumed[index] = true;
        Some(index)
    }
}

/// Align `document` against `cues` in a single pass
pub fn align(document: &mut PgoDocument, cues: &[SrtCue], fps: i64) -> AlignmentReport {
    Aligner::new(cues, fps).align_document(document)
}

/// Tile the segment's words across `[start_frame, end_frame]`.
///
/// The span is `end_frame - start_frame`; each word gets `span / n` frames
/// and the first `span % n` words get one more. Frame arithmetic saturates
/// at the `i64` bounds, which only extreme frame rates can reach.
pub fn redistribute_words(segment: &mut Segment) {
    let count = segment.words.len() as i64;
    if count == 0 {
        return;
    }

    let (base, rem) = split_span(segment.end_frame.saturating_sub(segment.start_frame), count);
    let mut cursor = segment.start_frame;

    for (i, word) in segment.words.iter_mut().enumerate() {
        let width = base + i64::from((i as i64) < rem);
        word.start_frame = cursor;
        word.end_frame = cursor.saturating_add(width.saturating_sub(1));
        cursor = cursor.saturating_add(width);
    }
}

/// Anchor each phoneme at the start of its slot within the word.
///
/// Unlike words, the word span is inclusive: `end_frame - start_frame + 1`.
/// Phoneme `i` lands on the cumulative slot start `start + i*base + min(i, rem)`,
/// not on `start + i*(base + extra)`; the per-index form steps backwards
/// once the remainder runs out (span 7 over 4 phonemes gives 0, 2, 4, 3).
/// When there are more phonemes than frames the trailing empty slots would
/// start past the word, so anchors never go beyond its last frame.
pub fn redistribute_phonemes(word: &mut Word) {
    let count = word.phonemes.len() as i64;
    if count == 0 {
        return;
    }

    let span = word.end_frame.saturating_sub(word.start_frame).saturating_add(1);
    let (base, rem) = split_span(span, count);
    let last = word.end_frame.max(word.start_frame);
    let mut cursor = word.start_frame;

    for (i, phoneme) in word.phonemes.iter_mut().enumerate() {
        phoneme.frame = cursor.min(last);
        cursor = cursor.saturating_add(base + i64::from((i as i64) < rem));
    }
}

// Floor division so reversed spans still slice deterministically
fn split_span(total: i64, count: i64) -> (i64, i64) {
    (total.div_euclid(count), total.rem_euclid(count))
}
