//! JSON output of mining results.

use std::io::Write;

use serde::Serialize;

use phasemine_core::{diagram::ElementPair, geometry::Point};

use crate::error::PhasemineError;

/// The flattened boundary of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapePoints {
    entry: String,
    shape: usize,
    points: Vec<Point>,
}

impl ShapePoints {
    pub fn new(entry: impl Into<String>, shape: usize, points: Vec<Point>) -> Self {
        Self {
            entry: entry.into(),
            shape,
            points,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Index of the region within its diagram's shape list.
    pub fn shape(&self) -> usize {
        self.shape
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`PhasemineError::Json`] if serialization fails and
/// [`PhasemineError::Io`] if writing fails.
pub fn write_json<T: Serialize + ?Sized>(
    mut writer: impl Write,
    value: &T,
) -> Result<(), PhasemineError> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders a pair list compactly, e.g. `[["Au","Cu"],["La","Mn"]]`.
///
/// # Errors
///
/// Returns [`PhasemineError::Json`] if serialization fails.
pub fn pairs_to_json(pairs: &[ElementPair]) -> Result<String, PhasemineError> {
    Ok(serde_json::to_string(pairs)?)
}
