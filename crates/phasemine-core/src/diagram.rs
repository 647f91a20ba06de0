//! Phase diagram records.
//!
//! These types mirror the JSON records delivered by the diagram retrieval
//! service. They are deserialized once and read-only afterwards; the engine
//! never mutates them.
//!
//! # Overview
//!
//! - [`PhaseDiagramEntry`] - One reported diagram for a binary system
//! - [`Shape`] - One labeled region or line inside a diagram
//! - [`ShapeKind`] - Whether a shape carries phase semantics or is decoration
//! - [`ElementPair`] - The sorted element-symbol key shared by all diagrams
//!   of the same binary system
//!
//! # Example
//!
//! ```
//! # use phasemine_core::diagram::PhaseDiagramEntry;
//! let json = r#"{
//!     "entry": "C904174",
//!     "chemical_elements": ["Cu", "Au"],
//!     "comp_range": [0, 100],
//!     "temp": [400, 1400],
//!     "shapes": [
//!         {"kind": "phase", "nphases": 1, "is_solid": true, "svgpath": "M 0.2,400 L 99.8,400 L 50,900 Z"}
//!     ]
//! }"#;
//!
//! let entry: PhaseDiagramEntry = serde_json::from_str(json).unwrap();
//! assert_eq!(entry.fingerprint().unwrap().to_string(), "Au-Cu");
//! assert!(entry.is_full_composition());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EntryError;

/// The composition axis of a full binary diagram, in percent.
pub const FULL_COMPOSITION_RANGE: [f64; 2] = [0.0, 100.0];

/// Whether a shape carries phase semantics.
///
/// Any kind other than `drawing` is treated as a region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ShapeKind {
    /// Decorative path without phase meaning (axes, tie lines, labels).
    Drawing,
    /// A labeled phase region or line; the original kind label is kept.
    Region(String),
}

impl ShapeKind {
    /// Returns true for decorative drawings.
    pub fn is_drawing(&self) -> bool {
        matches!(self, ShapeKind::Drawing)
    }
}

impl From<String> for ShapeKind {
    fn from(kind: String) -> Self {
        if kind == "drawing" {
            ShapeKind::Drawing
        } else {
            ShapeKind::Region(kind)
        }
    }
}

impl From<&str> for ShapeKind {
    fn from(kind: &str) -> Self {
        Self::from(kind.to_string())
    }
}

/// One labeled region within a phase diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shape {
    kind: ShapeKind,

    #[serde(rename = "nphases", default)]
    n_phases: Option<u32>,

    #[serde(default)]
    is_solid: Option<bool>,

    #[serde(default)]
    is_ordered: Option<bool>,

    #[serde(rename = "svgpath")]
    path: String,
}

impl Shape {
    /// Creates a shape of the given kind with no phase annotations.
    pub fn new(kind: impl Into<ShapeKind>, path: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            n_phases: None,
            is_solid: None,
            is_ordered: None,
            path: path.into(),
        }
    }

    /// Sets the number of coexisting phases (builder style).
    pub fn with_phases(mut self, n_phases: u32) -> Self {
        self.n_phases = Some(n_phases);
        self
    }

    /// Sets the solid flag (builder style).
    pub fn with_solid(mut self, is_solid: bool) -> Self {
        self.is_solid = Some(is_solid);
        self
    }

    /// Sets the ordering flag (builder style).
    pub fn with_ordered(mut self, is_ordered: bool) -> Self {
        self.is_ordered = Some(is_ordered);
        self
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Number of coexisting phases, if reported.
    pub fn n_phases(&self) -> Option<u32> {
        self.n_phases
    }

    /// Returns true only when the shape is explicitly marked solid.
    pub fn is_solid(&self) -> bool {
        self.is_solid == Some(true)
    }

    /// Returns true only when the shape is explicitly marked non-solid
    /// (liquid or gas).
    pub fn is_fluid(&self) -> bool {
        self.is_solid == Some(false)
    }

    /// The ordering flag as reported; `None` means unknown.
    pub fn is_ordered(&self) -> Option<bool> {
        self.is_ordered
    }

    /// Returns true if the shape is a single-phase region or line compound.
    pub fn is_single_phase(&self) -> bool {
        self.n_phases == Some(1)
    }

    /// The raw path description of the region boundary.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// One reported phase diagram for a binary element pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhaseDiagramEntry {
    #[serde(rename = "entry", default)]
    entry_id: String,

    #[serde(rename = "chemical_elements")]
    elements: Vec<String>,

    #[serde(rename = "comp_range")]
    composition_range: [f64; 2],

    #[serde(rename = "temp")]
    temperature_range: [f64; 2],

    #[serde(default)]
    shapes: Vec<Shape>,
}

impl PhaseDiagramEntry {
    /// Creates an entry without shapes.
    pub fn new(
        entry_id: impl Into<String>,
        elements: [&str; 2],
        composition_range: [f64; 2],
        temperature_range: [f64; 2],
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            elements: elements.iter().map(|e| e.to_string()).collect(),
            composition_range,
            temperature_range,
            shapes: Vec::new(),
        }
    }

    /// Appends a shape (builder style).
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    /// The element symbols as reported, unsorted.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn composition_range(&self) -> [f64; 2] {
        self.composition_range
    }

    pub fn temperature_range(&self) -> [f64; 2] {
        self.temperature_range
    }

    /// Returns `temp_max - temp_min`.
    pub fn temperature_span(&self) -> f64 {
        self.temperature_range[1] - self.temperature_range[0]
    }

    /// Returns true if the diagram covers exactly `[0, 100]` percent.
    pub fn is_full_composition(&self) -> bool {
        self.composition_range == FULL_COMPOSITION_RANGE
    }

    /// The shapes in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Computes the element-pair key of this diagram.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::InvalidElements`] unless the record names exactly
    /// two distinct, non-empty symbols.
    pub fn fingerprint(&self) -> Result<ElementPair, EntryError> {
        let invalid = || EntryError::InvalidElements {
            entry: self.entry_id.clone(),
            elements: self.elements.clone(),
        };
        match self.elements.as_slice() {
            [a, b] => ElementPair::try_new(a, b).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

/// The lexicographically sorted pair of element symbols of a binary system.
///
/// Ordering compares the first symbol, then the second. Serializes as a
/// two-element array, e.g. `["Au","Cu"]`.
///
/// # Examples
///
/// ```
/// # use phasemine_core::diagram::ElementPair;
/// let pair = ElementPair::try_new("Mn", "La").unwrap();
/// assert_eq!(pair.first(), "La");
/// assert_eq!(pair.second(), "Mn");
///
/// assert!(ElementPair::try_new("Fe", "Fe").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementPair(String, String);

impl ElementPair {
    /// Creates the sorted pair, or `None` if the symbols are equal or empty.
    pub fn try_new(a: impl Into<String>, b: impl Into<String>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        if a.is_empty() || b.is_empty() || a == b {
            return None;
        }
        if a <= b {
            Some(Self(a, b))
        } else {
            Some(Self(b, a))
        }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }
}

impl fmt::Display for ElementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_from_string() {
        assert_eq!(ShapeKind::from("drawing"), ShapeKind::Drawing);
        assert_eq!(
            ShapeKind::from("phase"),
            ShapeKind::Region("phase".to_string())
        );
        assert!(ShapeKind::from("drawing").is_drawing());
        assert!(!ShapeKind::from("phase").is_drawing());
    }

    #[test]
    fn test_shape_deserialize_full() {
        let json = r#"{"kind": "phase", "nphases": 1, "is_solid": true, "is_ordered": false, "svgpath": "M 0,0 L 1,1"}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();

        assert_eq!(shape.kind(), &ShapeKind::Region("phase".to_string()));
        assert_eq!(shape.n_phases(), Some(1));
        assert!(shape.is_single_phase());
        assert!(shape.is_solid());
        assert!(!shape.is_fluid());
        assert_eq!(shape.is_ordered(), Some(false));
        assert_eq!(shape.path(), "M 0,0 L 1,1");
    }

    #[test]
    fn test_shape_deserialize_missing_flags() {
        let json = r#"{"kind": "drawing", "svgpath": "M 0,0 L 100,0"}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();

        assert!(shape.kind().is_drawing());
        assert_eq!(shape.n_phases(), None);
        assert!(!shape.is_solid());
        assert!(!shape.is_fluid());
        assert_eq!(shape.is_ordered(), None);
    }

    #[test]
    fn test_shape_builder() {
        let shape = Shape::new("phase", "M 0,0 L 1,0")
            .with_phases(1)
            .with_solid(false)
            .with_ordered(true);

        assert!(shape.is_fluid());
        assert_eq!(shape.is_ordered(), Some(true));
    }

    #[test]
    fn test_entry_deserialize() {
        let json = r#"{
            "entry": "C1",
            "chemical_elements": ["Mn", "La"],
            "comp_range": [0, 100],
            "temp": [300, 1500.5],
            "shapes": []
        }"#;
        let entry: PhaseDiagramEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.entry_id(), "C1");
        assert_eq!(entry.elements(), &["Mn".to_string(), "La".to_string()]);
        assert!(entry.is_full_composition());
        assert_eq!(entry.temperature_span(), 1200.5);
        assert!(entry.shapes().is_empty());
    }

    #[test]
    fn test_entry_partial_composition() {
        let entry = PhaseDiagramEntry::new("C2", ["Fe", "O"], [0.0, 60.0], [0.0, 2000.0]);
        assert!(!entry.is_full_composition());
    }

    #[test]
    fn test_fingerprint_sorted() {
        let entry = PhaseDiagramEntry::new("C3", ["Cu", "Au"], [0.0, 100.0], [400.0, 1400.0]);
        let pair = entry.fingerprint().unwrap();

        assert_eq!(pair.first(), "Au");
        assert_eq!(pair.second(), "Cu");
        assert_eq!(pair.to_string(), "Au-Cu");
    }

    #[test]
    fn test_fingerprint_rejects_duplicates() {
        let entry = PhaseDiagramEntry::new("C4", ["Fe", "Fe"], [0.0, 100.0], [0.0, 1000.0]);

        assert_eq!(
            entry.fingerprint().unwrap_err(),
            EntryError::InvalidElements {
                entry: "C4".to_string(),
                elements: vec!["Fe".to_string(), "Fe".to_string()],
            }
        );
    }

    #[test]
    fn test_fingerprint_rejects_wrong_arity() {
        let json = r#"{"chemical_elements": ["Fe", "O", "Si"], "comp_range": [0, 100], "temp": [0, 1000]}"#;
        let entry: PhaseDiagramEntry = serde_json::from_str(json).unwrap();

        assert!(entry.fingerprint().is_err());
    }

    #[test]
    fn test_element_pair_ordering() {
        let mut pairs = vec![
            ElementPair::try_new("Mn", "La").unwrap(),
            ElementPair::try_new("Cu", "Au").unwrap(),
            ElementPair::try_new("Au", "Ag").unwrap(),
        ];
        pairs.sort();

        let rendered: Vec<String> = pairs.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["Ag-Au", "Au-Cu", "La-Mn"]);
    }

    #[test]
    fn test_element_pair_serializes_as_array() {
        let pair = ElementPair::try_new("Mn", "La").unwrap();
        assert_eq!(serde_json::to_string(&pair).unwrap(), r#"["La","Mn"]"#);
    }
}
