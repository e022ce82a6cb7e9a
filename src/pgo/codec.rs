/*!
 * PGO text codec.
 *
 * Layout, one value per line unless noted:
 *
 * ```text
 * version
 * audio file
 * fps
 * frame count
 * voice count
 *     name / full text / segment count
 *         text / start frame / end frame / word count
 *             "text start end phoneme_count"
 *                 "frame symbol"
 * ```
 *
 * Indentation is cosmetic. Decoding trims every line; encoding indents with
 * one tab per nesting level.
 */

use std::fmt::{self, Write};

use log::debug;

use super::model::{Phoneme, PgoDocument, Segment, Voice, Word};
use super::reader::{parse_int, LineReader};
use crate::errors::PgoError;

/// Decode a complete PGO document.
///
/// There is no partial decode: any missing line or malformed integer fails
/// the whole document.
pub fn decode(content: &str) -> Result<PgoDocument, PgoError> {
    let mut reader = LineReader::new(content);

    let version = reader.next_line("version")?.to_string();
    let audio_file = reader.next_line("audio file")?.to_string();
    let fps = reader.next_int("fps")?;
    let frame_count = reader.next_int("frame count")?;

    let voice_count: usize = reader.next_int("voice count")?;
    // Counts come from the file; grow as lines are actually read
    let mut voices = Vec::new();
    for _ in 0..voice_count {
        voices.push(decode_voice(&mut reader)?);
    }

    let leftover = reader.remaining();
    if leftover > 0 {
        debug!("Ignoring {} trailing line(s) after the last voice", leftover);
    }

    let document = PgoDocument {
        version,
        audio_file,
        fps,
        frame_count,
        voices,
    };

    debug!(
        "Decoded PGO: {} voice(s), {} segment(s), {} word(s), {} phoneme(s)",
        document.voices.len(),
        document.segment_count(),
        document.word_count(),
        document.phoneme_count()
    );

    Ok(document)
}

fn decode_voice(reader: &mut LineReader<'_>) -> Result<Voice, PgoError> {
    let mut voice = Voice::new(
        reader.next_line("voice name")?,
        reader.next_line("voice text")?,
    );

    let segment_count: usize = reader.next_int("segment count")?;
    for _ in 0..segment_count {
        voice.segments.push(decode_segment(reader)?);
    }

    Ok(voice)
}

fn decode_segment(reader: &mut LineReader<'_>) -> Result<Segment, PgoError> {
    let text = reader.next_line("segment text")?;
    let start_frame = reader.next_int("segment start frame")?;
    let end_frame = reader.next_int("segment end frame")?;
    let mut segment = Segment::new(text, start_frame, end_frame);

    let word_count: usize = reader.next_int("word count")?;
    for _ in 0..word_count {
        segment.words.push(decode_word(reader)?);
    }

    Ok(segment)
}

fn decode_word(reader: &mut LineReader<'_>) -> Result<Word, PgoError> {
    let tokens = reader.next_fields(&["word text", "word start frame", "word end frame", "phoneme count"])?;
    let line = reader.line_number() - 1;

    let mut word = Word::new(
        tokens[0],
        parse_int(tokens[1], line, "word start frame")?,
        parse_int(tokens[2], line, "word end frame")?,
    );
    let phoneme_count: usize = parse_int(tokens[3], line, "phoneme count")?;

    for _ in 0..phoneme_count {
        let tokens = reader.next_fields(&["phoneme frame", "phoneme symbol"])?;
        let line = reader.line_number() - 1;
        word.phonemes
            .push(Phoneme::new(parse_int(tokens[0], line, "phoneme frame")?, tokens[1]));
    }

    Ok(word)
}

/// Encode a document back to the PGO text layout
pub fn encode(document: &PgoDocument) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, document);
    out
}

fn write_document<W: Write>(out: &mut W, document: &PgoDocument) -> fmt::Result {
    writeln!(out, "{}", document.version)?;
    writeln!(out, "{}", document.audio_file)?;
    writeln!(out, "{}", document.fps)?;
    writeln!(out, "{}", document.frame_count)?;
    writeln!(out, "{}", document.voices.len())?;

    for voice in &document.voices {
        writeln!(out, "\t{}", voice.name)?;
        writeln!(out, "\t{}", voice.full_text)?;
        writeln!(out, "\t{}", voice.segments.len())?;

        for segment in &voice.segments {
            writeln!(out, "\t\t{}", segment.text)?;
            writeln!(out, "\t\t{}", segment.start_frame)?;
            writeln!(out, "\t\t{}", segment.end_frame)?;
            writeln!(out, "\t\t{}", segment.words.len())?;

            for word in &segment.words {
                writeln!(
                    out,
                    "\t\t\t{} {} {} {}",
                    word.text,
                    word.start_frame,
                    word.end_frame,
                    word.phonemes.len()
                )?;

                for phoneme in &word.phonemes {
                    writeln!(out, "\t\t\t\t{} {}", phoneme.frame, phoneme.symbol)?;
                }
            }
        }
    }

    Ok(())
}

impl fmt::Display for PgoDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_document(f, self)
    }
}
