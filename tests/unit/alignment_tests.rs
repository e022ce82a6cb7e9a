/*!
 * Tests for the frame alignment engine
 */

use pgosync::alignment::{align, redistribute_phonemes, redistribute_words, Aligner};
use pgosync::pgo::{Phoneme, Word};
use pgosync::srt::SrtCue;
use crate::common;

/// Words tile the span exactly, remainder frames go to the first words
#[test]
fn test_redistributeWords_acrossSpans_shouldTileExactly() {
    for words in 1..=7usize {
        for span in 0..=40i64 {
            let mut segment = common::build_segment("s", words, 0);
            segment.start_frame = 100;
            segment.end_frame = 100 + span;

            redistribute_words(&mut segment);

            let n = words as i64;
            let (base, rem) = (span / n, span % n);
            let widths: Vec<i64> = segment
                .words
                .iter()
                .map(|w| w.end_frame - w.start_frame + 1)
                .collect();

            assert_eq!(widths.iter().sum::<i64>(), span);
            assert_eq!(segment.words[0].start_frame, segment.start_frame);
            for pair in segment.words.windows(2) {
                assert_eq!(pair[1].start_frame, pair[0].end_frame + 1);
            }
            for (i, width) in widths.iter().enumerate() {
                let expected = if (i as i64) < rem { base + 1 } else { base };
                assert_eq!(*width, expected, "span {} words {} index {}", span, words, i);
            }
        }
    }
}

/// Phoneme i sits at start + i*base + min(i, rem)
#[test]
fn test_redistributePhonemes_acrossSpans_shouldAnchorAtSlotStarts() {
    for phonemes in 1..=6usize {
        for span in phonemes as i64..=30 {
            let mut word = Word::new("w", 50, 50 + span - 1)
                .with_phonemes((0..phonemes).map(|_| Phoneme::new(-1, "P")).collect());

            redistribute_phonemes(&mut word);

            let m = phonemes as i64;
            let (base, rem) = (span / m, span % m);
            let frames: Vec<i64> = word.phonemes.iter().map(|p| p.frame).collect();

            for (i, frame) in frames.iter().enumerate() {
                let i = i as i64;
                assert_eq!(*frame, word.start_frame + i * base + i.min(rem));
                assert!(*frame >= word.start_frame && *frame <= word.end_frame);
            }
            assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn test_redistribute_shouldNeverChangeTextOrCounts() {
    let mut segment = common::build_segment("s", 3, 2);
    segment.start_frame = 0;
    segment.end_frame = 17;
    let before: Vec<(String, Vec<String>)> = segment
        .words
        .iter()
        .map(|w| (w.text.clone(), w.phonemes.iter().map(|p| p.symbol.clone()).collect()))
        .collect();

    redistribute_words(&mut segment);
    for word in &mut segment.words {
        redistribute_phonemes(word);
    }

    let after: Vec<(String, Vec<String>)> = segment
        .words
        .iter()
        .map(|w| (w.text.clone(), w.phonemes.iter().map(|p| p.symbol.clone()).collect()))
        .collect();
    assert_eq!(before, after);
}

/// j segments and k cues sharing a text: min(j, k) matches, in cue order
#[test]
fn test_align_withSharedText_shouldMatchMinOfSegmentsAndCues() {
    for segments in 0..=4usize {
        for cues in 0..=4usize {
            let mut doc = common::build_document(
                10,
                (0..segments).map(|_| common::build_segment("again", 1, 1)).collect(),
            );
            let track: Vec<SrtCue> = (0..cues)
                .map(|i| SrtCue::new(i as f64, i as f64 + 0.5, "again"))
                .collect();

            let report = align(&mut doc, &track, 10);

            assert_eq!(report.matched.len(), segments.min(cues));
            assert_eq!(report.unmatched.len(), segments.saturating_sub(cues));
            for (i, m) in report.matched.iter().enumerate() {
                assert_eq!(m.cue, i);
                assert_eq!(m.segment, i);
                assert_eq!(m.start_frame, 10 * i as i64);
            }
        }
    }
}

#[test]
fn test_align_withMultipleVoices_shouldShareConsumption() {
    let mut doc = common::build_document(24, vec![common::build_segment("hi", 1, 1)]);
    let mut second = doc.voices[0].clone();
    second.name = "Echo".to_string();
    doc.voices.push(second);

    let cues = vec![SrtCue::new(1.0, 2.0, "hi")];
    let report = align(&mut doc, &cues, 24);

    assert_eq!(report.matched.len(), 1);
    assert_eq!(report.matched[0].voice, 0);
    assert_eq!(report.unmatched[0].voice_name, "Echo");
}

#[test]
fn test_aligner_secondRun_shouldLeaveAlignedDocumentUnchanged() {
    let mut doc = common::build_document(
        24,
        vec![
            common::build_segment("one", 2, 2),
            common::build_segment("two", 3, 1),
        ],
    );
    let cues = vec![SrtCue::new(0.0, 1.0, "one"), SrtCue::new(1.0, 2.25, "two")];
    let mut aligner = Aligner::new(&cues, 24);

    aligner.align_document(&mut doc);
    let aligned = doc.clone();
    let second = aligner.align_document(&mut doc);

    assert_eq!(doc, aligned);
    assert_eq!(second.unmatched.len(), 2);
    assert_eq!(aligner.consumed_count(), 2);
}

#[test]
fn test_align_withHelloScenario_shouldProduceExpectedFrames() {
    let mut doc = common::build_document(24, vec![common::build_segment("hello", 2, 1)]);
    let cues = vec![SrtCue::new(1.0, 2.0, "hello")];

    align(&mut doc, &cues, 24);

    let seg = &doc.voices[0].segments[0];
    assert_eq!((seg.start_frame, seg.end_frame), (24, 48));
    assert_eq!((seg.words[0].start_frame, seg.words[0].end_frame), (24, 35));
    assert_eq!((seg.words[1].start_frame, seg.words[1].end_frame), (36, 47));
    assert_eq!(seg.words[0].phonemes[0].frame, 24);
    assert_eq!(seg.words[1].phonemes[0].frame, 36);
}
