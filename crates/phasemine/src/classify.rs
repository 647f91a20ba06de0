//! Per-shape tolerance heuristics.
//!
//! A single-phase solid region tells us something about its binary system:
//!
//! - spanning the whole composition axis, it is a continuous solid solution
//! - hugging one edge of the axis, it is a pure element (possibly with some
//!   solubility) and says nothing about compounds
//! - anywhere else, it is an intermediate compound
//!
//! [`ToleranceClassifier`] turns a region's [`Bounds`] into one of these
//! [`Verdict`]s; [`is_qualifying`] selects the regions it applies to.

use phasemine_core::{
    diagram::{FULL_COMPOSITION_RANGE, Shape},
    geometry::Bounds,
};

use crate::config::ToleranceConfig;

/// What a single region says about its binary system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The region spans the whole composition axis.
    ContinuousSolidSolution,

    /// The region lies at a pure element; it is ignored.
    ElementalDiscard,

    /// The region is an intermediate phase.
    CompoundForming,
}

impl Verdict {
    /// Returns true for verdicts that settle a diagram.
    pub fn is_decisive(self) -> bool {
        !matches!(self, Verdict::ElementalDiscard)
    }
}

/// Returns true if `|a - b| < tolerance`.
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Returns true for regions the classifier applies to.
///
/// Qualifying regions are labeled (not drawings), solid, single-phase and not
/// explicitly disordered. A missing ordering flag counts as ordered.
pub fn is_qualifying(shape: &Shape) -> bool {
    !shape.kind().is_drawing()
        && shape.is_solid()
        && shape.is_single_phase()
        && shape.is_ordered() != Some(false)
}

/// Classifies region bounds with configurable tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceClassifier {
    element: f64,
    span: f64,
}

impl ToleranceClassifier {
    /// Creates a classifier.
    ///
    /// `element` is the distance from a pure element within which both
    /// composition bounds must lie for an elemental verdict; `span` is the
    /// distance from 100 within which a composition span is considered full.
    pub fn new(element: f64, span: f64) -> Self {
        Self { element, span }
    }

    pub fn element(&self) -> f64 {
        self.element
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    /// Classifies a region by its bounds.
    ///
    /// The continuous-solution check runs first, so a region that both spans
    /// the axis and touches an edge is a continuous solution.
    pub fn classify(&self, bounds: Bounds) -> Verdict {
        let [low, high] = FULL_COMPOSITION_RANGE;

        if almost_equal(bounds.composition_span(), high - low, self.span) {
            return Verdict::ContinuousSolidSolution;
        }

        let near = |edge: f64| {
            almost_equal(bounds.x0(), edge, self.element)
                && almost_equal(bounds.x1(), edge, self.element)
        };
        if near(low) || near(high) {
            Verdict::ElementalDiscard
        } else {
            Verdict::CompoundForming
        }
    }
}

impl Default for ToleranceClassifier {
    fn default() -> Self {
        Self::from(&ToleranceConfig::default())
    }
}

impl From<&ToleranceConfig> for ToleranceClassifier {
    fn from(config: &ToleranceConfig) -> Self {
        Self::new(config.element(), config.span())
    }
}
