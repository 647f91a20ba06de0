//! Phasemine - mines binary phase diagrams for element pairs that form no
//! compounds.
//!
//! Each diagram record describes its phase regions as path outlines. The
//! [`Miner`] reduces every qualifying solid region to its bounding box,
//! classifies it with composition tolerances, and reconciles the verdicts of
//! all diagrams reported for the same element pair.
//!
//! Pipeline per region:
//!
//! ```text
//! path ─▶ commands ─▶ boundary points ─▶ bounds ─▶ verdict
//! ```
//!
//! followed by one [`ClassificationState`] pass over all diagrams.

pub mod bounds;
pub mod classify;
pub mod config;
pub mod consensus;
pub mod export;
pub mod liquidus;
pub mod records;
pub mod reduce;

mod error;

pub use phasemine_core::{curve, diagram, geometry, path};

pub use error::PhasemineError;

use log::{debug, info, trace, warn};

use phasemine_core::{
    diagram::{ElementPair, PhaseDiagramEntry, Shape},
    geometry::Point,
};

use classify::{ToleranceClassifier, Verdict, is_qualifying};
use config::{AppConfig, ErrorPolicy};
use consensus::{ClassificationState, DiagramVerdict};
use export::ShapePoints;
use liquidus::{LiquidusExtractor, LiquidusLine, LiquidusReport, is_liquid_region};
use reduce::ShapeReducer;

/// The outcome of a classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    nonformers: Vec<ElementPair>,
    records_seen: usize,
    records_considered: usize,
    records_skipped: usize,
}

impl Classification {
    /// The nonformer pairs, sorted.
    pub fn nonformers(&self) -> &[ElementPair] {
        &self.nonformers
    }

    pub fn into_nonformers(self) -> Vec<ElementPair> {
        self.nonformers
    }

    /// Number of records read.
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Number of records that passed the diagram filters.
    pub fn records_considered(&self) -> usize {
        self.records_considered
    }

    /// Number of records left out because they could not be processed.
    pub fn records_skipped(&self) -> usize {
        self.records_skipped
    }
}

/// Counters for a batch of recorded diagrams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    seen: usize,
    considered: usize,
    skipped: usize,
}

impl RunStats {
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn considered(&self) -> usize {
        self.considered
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Adds the counters of another batch.
    pub fn merge(&mut self, other: RunStats) {
        self.seen += other.seen;
        self.considered += other.considered;
        self.skipped += other.skipped;
    }
}

/// Entry point for mining diagram records.
///
/// # Examples
///
/// ```
/// use phasemine::{Miner, config::AppConfig};
/// use phasemine::diagram::{PhaseDiagramEntry, Shape};
///
/// let entry = PhaseDiagramEntry::new("C1", ["Cu", "Au"], [0.0, 100.0], [200.0, 1200.0])
///     .with_shape(
///         Shape::new("phase", "M 0,200 L 100,200 L 100,900 L 0,900 Z")
///             .with_phases(1)
///             .with_solid(true),
///     );
///
/// let miner = Miner::new(AppConfig::default())?;
/// let classification = miner.classify(&[entry])?;
///
/// assert_eq!(classification.nonformers().len(), 1);
/// assert_eq!(classification.nonformers()[0].to_string(), "Au-Cu");
/// # Ok::<(), phasemine::PhasemineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Miner {
    config: AppConfig,
    reducer: ShapeReducer,
    classifier: ToleranceClassifier,
    extractor: LiquidusExtractor,
}

impl Default for Miner {
    fn default() -> Self {
        Self::with_valid_config(AppConfig::default())
    }
}

impl Miner {
    /// Create a new miner with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PhasemineError::Config`] if the configuration does not pass
    /// [`AppConfig::validate`].
    pub fn new(config: AppConfig) -> Result<Self, PhasemineError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: AppConfig) -> Self {
        Self {
            reducer: ShapeReducer::new(config.flatten().subdivisions()),
            classifier: ToleranceClassifier::from(config.tolerance()),
            extractor: LiquidusExtractor::from(config.liquidus()),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns true if the diagram covers the full composition axis and a
    /// wide enough temperature range.
    pub fn passes_filters(&self, entry: &PhaseDiagramEntry) -> bool {
        entry.is_full_composition()
            && entry.temperature_span() >= self.config.filter().min_temperature_span()
    }

    /// Parses and reduces a region's path to its boundary points.
    ///
    /// # Errors
    ///
    /// Returns [`PhasemineError::MalformedPath`] if the path cannot be parsed.
    pub fn shape_boundary(
        &self,
        entry_id: &str,
        shape: &Shape,
    ) -> Result<Vec<Point>, PhasemineError> {
        let commands = phasemine_parser::parse_path(shape.path())
            .map_err(|err| PhasemineError::new_path_error(entry_id, err, shape.path()))?;
        self.reducer
            .reduce(&commands)
            .map_err(|err| PhasemineError::new_geometry_error(entry_id, err))
    }

    /// Classifies one qualifying region.
    ///
    /// # Errors
    ///
    /// Returns [`PhasemineError::MalformedPath`] for unparsable paths and
    /// [`PhasemineError::Geometry`] for boundaries with fewer than two points.
    pub fn classify_shape(
        &self,
        entry_id: &str,
        shape: &Shape,
    ) -> Result<Verdict, PhasemineError> {
        let points = self.shape_boundary(entry_id, shape)?;
        let bounds = bounds::extract_bounds(&points)
            .map_err(|err| PhasemineError::new_geometry_error(entry_id, err))?;
        let verdict = self.classifier.classify(bounds);

        trace!(entry = entry_id, bounds:? = bounds.to_tuple(), verdict:?; "Classified region");
        Ok(verdict)
    }

    /// Classifies one diagram.
    ///
    /// Returns `Ok(None)` for diagrams rejected by the filters. Regions are
    /// read in drawing order and reading stops at the first decisive one, so
    /// later regions are never parsed.
    ///
    /// # Errors
    ///
    /// Returns [`PhasemineError::InvalidEntry`] if the record does not name
    /// two distinct elements, or any error of [`Miner::classify_shape`].
    pub fn classify_entry(
        &self,
        entry: &PhaseDiagramEntry,
    ) -> Result<Option<(ElementPair, DiagramVerdict)>, PhasemineError> {
        if !self.passes_filters(entry) {
            debug!(entry = entry.entry_id(); "Diagram filtered out");
            return Ok(None);
        }

        let pair = entry.fingerprint()?;

        for shape in entry.shapes().iter().filter(|shape| is_qualifying(shape)) {
            let region = self.classify_shape(entry.entry_id(), shape)?;
            if let Some(verdict) = DiagramVerdict::from_region(region) {
                return Ok(Some((pair, verdict)));
            }
        }

        Ok(Some((pair, DiagramVerdict::Inconclusive)))
    }

    /// Classifies `entries` into `state`, applying the error policy.
    ///
    /// Callers splitting work across threads can record each partition into
    /// its own state and [`merge`](ClassificationState::merge) them.
    ///
    /// # Errors
    ///
    /// With [`ErrorPolicy::Fail`], returns the first entry error.
    pub fn record_entries(
        &self,
        entries: &[PhaseDiagramEntry],
        state: &mut ClassificationState,
    ) -> Result<RunStats, PhasemineError> {
        let mut stats = RunStats::default();

        for entry in entries {
            stats.seen += 1;
            match self.apply_policy(entry, self.classify_entry(entry))? {
                Some(Some((pair, verdict))) => {
                    stats.considered += 1;
                    state.record(entry.entry_id(), pair, verdict);
                }
                Some(None) => {}
                None => stats.skipped += 1,
            }
        }

        Ok(stats)
    }

    /// Classifies all entries and returns the sorted nonformer pairs.
    ///
    /// # Errors
    ///
    /// With [`ErrorPolicy::Fail`], returns the first entry error.
    pub fn classify(
        &self,
        entries: &[PhaseDiagramEntry],
    ) -> Result<Classification, PhasemineError> {
        info!(entries = entries.len(); "Classifying diagrams");

        let mut state = ClassificationState::new();
        let stats = self.record_entries(entries, &mut state)?;
        let nonformers = state.finalize();

        info!(
            seen = stats.seen,
            considered = stats.considered,
            skipped = stats.skipped,
            nonformers = nonformers.len();
            "Classification completed"
        );

        Ok(Classification {
            nonformers,
            records_seen: stats.seen,
            records_considered: stats.considered,
            records_skipped: stats.skipped,
        })
    }

    /// Reduces every labeled region of every entry to its boundary points.
    ///
    /// Drawings are left out. Entries are not filtered.
    ///
    /// # Errors
    ///
    /// With [`ErrorPolicy::Fail`], returns the first path error.
    pub fn shape_points(
        &self,
        entries: &[PhaseDiagramEntry],
    ) -> Result<Vec<ShapePoints>, PhasemineError> {
        let mut shapes = Vec::new();

        for entry in entries {
            let result: Result<Vec<ShapePoints>, PhasemineError> = entry
                .shapes()
                .iter()
                .enumerate()
                .filter(|(_, shape)| !shape.kind().is_drawing())
                .map(|(index, shape)| {
                    self.shape_boundary(entry.entry_id(), shape)
                        .map(|points| ShapePoints::new(entry.entry_id(), index, points))
                })
                .collect();

            if let Some(entry_shapes) = self.apply_policy(entry, result)? {
                shapes.extend(entry_shapes);
            }
        }

        info!(shapes = shapes.len(); "Reduced region boundaries");
        Ok(shapes)
    }

    /// Extracts the liquidus lines of all diagrams reported for one pair.
    ///
    /// The two symbols may be given in any order. Only diagrams passing the
    /// filters are read; of each, the first liquid region is used and any
    /// further one is ignored as too complex. Diagrams whose liquidus line
    /// ends up empty are left out of the report.
    ///
    /// # Errors
    ///
    /// Returns [`PhasemineError::InvalidPair`] unless the symbols are
    /// distinct and non-empty. With [`ErrorPolicy::Fail`], returns the first
    /// path error.
    pub fn liquidus(
        &self,
        entries: &[PhaseDiagramEntry],
        first: &str,
        second: &str,
    ) -> Result<LiquidusReport, PhasemineError> {
        let pair =
            ElementPair::try_new(first, second).ok_or_else(|| PhasemineError::InvalidPair {
                first: first.to_string(),
                second: second.to_string(),
            })?;
        info!(pair = pair.to_string(); "Extracting liquidus lines");

        let mut report = LiquidusReport::new(pair.clone());

        for entry in entries {
            if entry.fingerprint().ok().as_ref() != Some(&pair) || !self.passes_filters(entry) {
                continue;
            }
            report.include_range(entry);

            let mut liquids = entry.shapes().iter().filter(|shape| is_liquid_region(shape));
            let Some(liquid) = liquids.next() else {
                debug!(entry = entry.entry_id(); "No liquid region");
                continue;
            };
            if liquids.next().is_some() {
                warn!(
                    entry = entry.entry_id();
                    "Another liquid or gas region found, diagram is too complex"
                );
            }

            let boundary = self.shape_boundary(entry.entry_id(), liquid);
            let Some(boundary) = self.apply_policy(entry, boundary)? else {
                continue;
            };
            let points = self.extractor.extract(entry, &boundary);
            if points.is_empty() {
                debug!(entry = entry.entry_id(); "Liquidus line is empty");
                continue;
            }
            report.push(LiquidusLine::new(entry.entry_id(), points));
        }

        info!(lines = report.lines().len(); "Liquidus extraction completed");
        Ok(report)
    }

    /// Applies the error policy to the result of processing `entry`.
    ///
    /// Returns `Ok(None)` for an error that was skipped.
    fn apply_policy<T>(
        &self,
        entry: &PhaseDiagramEntry,
        result: Result<T, PhasemineError>,
    ) -> Result<Option<T>, PhasemineError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self.config.error_policy() {
                ErrorPolicy::Fail => Err(err),
                ErrorPolicy::Skip => {
                    warn!(entry = entry.entry_id(), err = err.to_string(); "Skipping entry");
                    Ok(None)
                }
            },
        }
    }
}
