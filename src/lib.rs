/*!
 * # pgosync - PGO lip-sync timing to SRT alignment
 *
 * A Rust library for re-timing pre-generated lip-sync data (PGO files)
 * against an externally authored subtitle track (SRT files).
 *
 * ## Features
 *
 * - Decode and encode the hierarchical PGO timing format
 *   (voice → segment → word → phoneme)
 * - Decode SRT subtitle tracks
 * - Match segments to cues by exact text, consuming each cue at most once
 * - Re-slice word and phoneme frames to fit the new segment bounds
 * - Validate the resulting frame layout
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: SRT timestamp and frame conversions
 * - `pgo`: PGO document model and codec
 * - `srt`: SRT cue model and codec
 * - `alignment`: the frame alignment engine
 * - `validation`: frame layout checks
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod pgo;
pub mod srt;
pub mod timecode;
pub mod validation;

// Re-export main types for easier usage
pub use alignment::{align, AlignmentReport, Aligner};
pub use app_config::Config;
pub use errors::{AppError, PgoError, SrtError, TimecodeError};
pub use pgo::{Phoneme, PgoDocument, Segment, Voice, Word};
pub use srt::{SrtCue, SrtDocument};
