//! Reading diagram records.
//!
//! Records are JSON objects in the layout of the phase diagram API: either a
//! single JSON array of records, or a stream of records separated by
//! whitespace (one per line, as in JSON Lines).

use std::io::Read;

use log::debug;
use serde_json::Deserializer;

use phasemine_core::diagram::PhaseDiagramEntry;

use crate::error::PhasemineError;

/// Parses records from a string.
///
/// # Errors
///
/// Returns [`PhasemineError::Json`] if the text is neither a JSON array of
/// records nor a stream of record objects.
pub fn parse_entries(text: &str) -> Result<Vec<PhaseDiagramEntry>, PhasemineError> {
    let entries = if text.trim_start().starts_with('[') {
        serde_json::from_str(text)?
    } else {
        Deserializer::from_str(text)
            .into_iter::<PhaseDiagramEntry>()
            .collect::<Result<Vec<_>, _>>()?
    };

    debug!(entries = entries.len(); "Parsed diagram records");
    Ok(entries)
}

/// Reads all records from `reader`.
///
/// # Errors
///
/// Returns [`PhasemineError::Io`] if reading fails, or any error of
/// [`parse_entries`].
pub fn read_entries(mut reader: impl Read) -> Result<Vec<PhaseDiagramEntry>, PhasemineError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_entries(&text)
}
