//! Configuration types for the phasemine engine.
//!
//! This module provides configuration structures that control which diagrams
//! are considered, how strict the geometric heuristics are, and how entry
//! errors are handled. All types implement [`serde::Deserialize`] for
//! loading from external sources; every field has a default, so an empty
//! document yields [`AppConfig::default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`FilterConfig`] - Diagram-level filters applied before any shape is read.
//! - [`ToleranceConfig`] - Tolerances of the shape classifier.
//! - [`FlattenConfig`] - Curve flattening resolution.
//! - [`LiquidusConfig`] - Edge margins for liquidus line extraction.
//! - [`ErrorPolicy`] - Whether a bad entry aborts the run or is skipped.
//!
//! # Example
//!
//! ```
//! # use phasemine::config::{AppConfig, ErrorPolicy};
//! let config = AppConfig::default();
//! assert_eq!(config.tolerance().element(), 12.5);
//! assert_eq!(config.error_policy(), ErrorPolicy::Fail);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use phasemine_core::curve::DEFAULT_SUBDIVISIONS;

use crate::error::PhasemineError;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Diagram filter section.
    filter: FilterConfig,

    /// Classifier tolerance section.
    tolerance: ToleranceConfig,

    /// Curve flattening section.
    flatten: FlattenConfig,

    /// Liquidus extraction section.
    liquidus: LiquidusConfig,

    /// What to do with entries that fail to process.
    error_policy: ErrorPolicy,
}

impl AppConfig {
    /// Creates a configuration from its sections.
    pub fn new(
        filter: FilterConfig,
        tolerance: ToleranceConfig,
        flatten: FlattenConfig,
        liquidus: LiquidusConfig,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            filter,
            tolerance,
            flatten,
            liquidus,
            error_policy,
        }
    }

    /// Returns a copy with the given error policy.
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Returns a copy with the given tolerance section.
    pub fn with_tolerance(mut self, tolerance: ToleranceConfig) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn tolerance(&self) -> &ToleranceConfig {
        &self.tolerance
    }

    pub fn flatten(&self) -> &FlattenConfig {
        &self.flatten
    }

    pub fn liquidus(&self) -> &LiquidusConfig {
        &self.liquidus
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PhasemineError::Config`] if a tolerance is not strictly
    /// positive, a margin or span is negative, or fewer than 2 curve
    /// subdivisions are requested.
    pub fn validate(&self) -> Result<(), PhasemineError> {
        let positive = [
            ("tolerance.element", self.tolerance.element),
            ("tolerance.span", self.tolerance.span),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PhasemineError::Config(format!(
                    "`{name}` must be a positive number, got {value}"
                )));
            }
        }

        let non_negative = [
            ("filter.min_temperature_span", self.filter.min_temperature_span),
            ("liquidus.composition_margin", self.liquidus.composition_margin),
            ("liquidus.temperature_margin", self.liquidus.temperature_margin),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PhasemineError::Config(format!(
                    "`{name}` must not be negative, got {value}"
                )));
            }
        }

        if self.flatten.subdivisions < 2 {
            return Err(PhasemineError::Config(format!(
                "`flatten.subdivisions` must be at least 2, got {}",
                self.flatten.subdivisions
            )));
        }

        Ok(())
    }
}

/// Filters deciding whether a diagram is considered at all.
///
/// Only diagrams covering the full `[0, 100]` composition axis are read; that
/// check is fixed. The temperature span threshold is configurable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum `temp_max - temp_min` for a diagram to be considered.
    min_temperature_span: f64,
}

impl FilterConfig {
    pub fn new(min_temperature_span: f64) -> Self {
        Self {
            min_temperature_span,
        }
    }

    pub fn min_temperature_span(&self) -> f64 {
        self.min_temperature_span
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_temperature_span: 300.0,
        }
    }
}

/// Tolerances of the shape classifier, in composition percent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    /// How close to a pure element both bounds must lie for the shape to be
    /// treated as an elemental phase.
    element: f64,

    /// How close to 100 a composition span must be to count as spanning
    /// the whole axis.
    span: f64,
}

impl ToleranceConfig {
    pub fn new(element: f64, span: f64) -> Self {
        Self { element, span }
    }

    pub fn element(&self) -> f64 {
        self.element
    }

    pub fn span(&self) -> f64 {
        self.span
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            element: 12.5,
            span: 0.5,
        }
    }
}

/// Curve flattening resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    /// Samples taken along each curve, both ends included.
    subdivisions: usize,
}

impl FlattenConfig {
    pub fn new(subdivisions: usize) -> Self {
        Self { subdivisions }
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

/// Margins trimming the diagram edges off a liquid region's boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LiquidusConfig {
    composition_margin: f64,
    temperature_margin: f64,
}

impl LiquidusConfig {
    pub fn new(composition_margin: f64, temperature_margin: f64) -> Self {
        Self {
            composition_margin,
            temperature_margin,
        }
    }

    /// Distance kept from both composition edges.
    pub fn composition_margin(&self) -> f64 {
        self.composition_margin
    }

    /// Distance kept below the top of the temperature axis.
    pub fn temperature_margin(&self) -> f64 {
        self.temperature_margin
    }
}

impl Default for LiquidusConfig {
    fn default() -> Self {
        Self {
            composition_margin: 0.1,
            temperature_margin: 5.0,
        }
    }
}

/// How entries that fail to process are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the run with the first error.
    #[default]
    Fail,

    /// Log the entry at `warn` level and leave it out.
    Skip,
}
