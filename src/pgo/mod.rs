/*!
 * PGO lip-sync timing documents.
 *
 * - `model`: the voice → segment → word → phoneme tree
 * - `reader`: positional line reader used by the decoder
 * - `codec`: text decode/encode
 */

pub mod codec;
pub mod model;
pub mod reader;

use std::path::Path;

use anyhow::{Context, Result};

use crate::file_utils::FileManager;

pub use codec::{decode, encode};
pub use model::{Phoneme, PgoDocument, Segment, Voice, Word};

/// Read and decode a PGO file
pub fn load<P: AsRef<Path>>(path: P) -> Result<PgoDocument> {
    let path = path.as_ref();
    let content = FileManager::read_to_string(path)?;
    decode(&content).with_context(|| format!("Failed to parse PGO file: {}", path.display()))
}

/// Encode and write a PGO file
pub fn save<P: AsRef<Path>>(path: P, document: &PgoDocument) -> Result<()> {
    FileManager::write_to_file(path, &encode(document))
}
