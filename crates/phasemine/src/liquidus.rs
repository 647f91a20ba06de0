//! Liquidus line extraction.
//!
//! The liquidus of a binary system is the upper boundary of its single liquid
//! region. It is approximated by taking the liquid region's boundary points
//! and dropping those that lie on the diagram frame: the top of the
//! temperature axis and both composition edges. What remains, sorted by
//! composition, is the liquidus line.

use serde::Serialize;

use phasemine_core::{
    diagram::{ElementPair, PhaseDiagramEntry, Shape},
    geometry::Point,
};

use crate::config::LiquidusConfig;

/// Lower bound of the reported temperature window.
pub const WINDOW_MIN_TEMPERATURE: f64 = 500.0;

/// Upper bound of the reported temperature window.
pub const WINDOW_MAX_TEMPERATURE: f64 = 700.0;

/// Returns true for single-phase regions explicitly marked as not solid.
pub fn is_liquid_region(shape: &Shape) -> bool {
    !shape.kind().is_drawing() && shape.is_single_phase() && shape.is_fluid()
}

/// The liquidus line of one diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidusLine {
    entry: String,
    points: Vec<Point>,
}

impl LiquidusLine {
    pub fn new(entry: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            entry: entry.into(),
            points,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The line's points, sorted by composition.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// All liquidus lines reported for one element pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidusReport {
    pair: ElementPair,
    temperature_window: [f64; 2],
    lines: Vec<LiquidusLine>,
}

impl LiquidusReport {
    /// Creates an empty report with the default temperature window.
    pub fn new(pair: ElementPair) -> Self {
        Self {
            pair,
            temperature_window: [WINDOW_MIN_TEMPERATURE, WINDOW_MAX_TEMPERATURE],
            lines: Vec::new(),
        }
    }

    /// Widens the temperature window to cover `entry`.
    pub fn include_range(&mut self, entry: &PhaseDiagramEntry) {
        let [low, high] = entry.temperature_range();
        self.temperature_window[0] = self.temperature_window[0].min(low);
        self.temperature_window[1] = self.temperature_window[1].max(high);
    }

    pub fn push(&mut self, line: LiquidusLine) {
        self.lines.push(line);
    }

    pub fn pair(&self) -> &ElementPair {
        &self.pair
    }

    /// Temperature range covering every considered diagram, never narrower
    /// than `[500, 700]`.
    pub fn temperature_window(&self) -> [f64; 2] {
        self.temperature_window
    }

    pub fn lines(&self) -> &[LiquidusLine] {
        &self.lines
    }
}

/// Trims a liquid region's boundary down to its liquidus line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidusExtractor {
    composition_margin: f64,
    temperature_margin: f64,
}

impl LiquidusExtractor {
    pub fn new(composition_margin: f64, temperature_margin: f64) -> Self {
        Self {
            composition_margin,
            temperature_margin,
        }
    }

    /// Keeps the boundary points strictly inside the diagram frame, sorted
    /// by composition.
    ///
    /// Points must lie below the top of the temperature axis by more than the
    /// temperature margin, and further than the composition margin from both
    /// composition edges. Points with equal composition keep their boundary
    /// order.
    pub fn extract(&self, entry: &PhaseDiagramEntry, boundary: &[Point]) -> Vec<Point> {
        let [comp_min, comp_max] = entry.composition_range();
        let [_, temp_max] = entry.temperature_range();

        let mut line: Vec<Point> = boundary
            .iter()
            .copied()
            .filter(|p| {
                p.y() < temp_max - self.temperature_margin
                    && p.x() > comp_min + self.composition_margin
                    && p.x() < comp_max - self.composition_margin
            })
            .collect();
        line.sort_by(|a, b| a.x().total_cmp(&b.x()));
        line
    }
}

impl Default for LiquidusExtractor {
    fn default() -> Self {
        Self::from(&LiquidusConfig::default())
    }
}

impl From<&LiquidusConfig> for LiquidusExtractor {
    fn from(config: &LiquidusConfig) -> Self {
        Self::new(config.composition_margin(), config.temperature_margin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(temp: [f64; 2]) -> PhaseDiagramEntry {
        PhaseDiagramEntry::new("C1", ["Ag", "Cu"], [0.0, 100.0], temp)
    }

    #[test]
    fn test_liquid_region() {
        let liquid = Shape::new("phase", "M 0,0").with_phases(1).with_solid(false);

        assert!(is_liquid_region(&liquid));
        assert!(!is_liquid_region(&liquid.clone().with_solid(true)));
        assert!(!is_liquid_region(&liquid.clone().with_phases(2)));
        // An unknown state is not treated as liquid.
        assert!(!is_liquid_region(&Shape::new("phase", "M 0,0").with_phases(1)));
    }

    #[test]
    fn test_extract_drops_frame_points() {
        let boundary = [
            Point::new(0.0, 1100.0),
            Point::new(0.0, 1300.0),
            Point::new(100.0, 1300.0),
            Point::new(100.0, 1085.0),
            Point::new(71.9, 779.0),
            Point::new(40.0, 950.0),
            Point::new(0.05, 1000.0),
        ];

        let line = LiquidusExtractor::default().extract(&entry([300.0, 1300.0]), &boundary);

        assert_eq!(line, vec![Point::new(40.0, 950.0), Point::new(71.9, 779.0)]);
    }

    #[test]
    fn test_extract_temperature_margin_is_strict() {
        let boundary = [Point::new(50.0, 1295.0), Point::new(50.0, 1294.9)];

        let line = LiquidusExtractor::default().extract(&entry([300.0, 1300.0]), &boundary);

        assert_eq!(line, vec![Point::new(50.0, 1294.9)]);
    }

    #[test]
    fn test_extract_keeps_order_of_equal_compositions() {
        let boundary = [Point::new(50.0, 900.0), Point::new(20.0, 700.0), Point::new(50.0, 800.0)];

        let line = LiquidusExtractor::default().extract(&entry([300.0, 1300.0]), &boundary);

        assert_eq!(
            line,
            vec![Point::new(20.0, 700.0), Point::new(50.0, 900.0), Point::new(50.0, 800.0)]
        );
    }

    #[test]
    fn test_report_window() {
        let mut report = LiquidusReport::new(ElementPair::try_new("Ag", "Cu").unwrap());
        assert_eq!(report.temperature_window(), [500.0, 700.0]);

        report.include_range(&entry([600.0, 1300.0]));
        assert_eq!(report.temperature_window(), [500.0, 1300.0]);

        report.include_range(&entry([200.0, 650.0]));
        assert_eq!(report.temperature_window(), [200.0, 1300.0]);
    }
}
