//! Reconciliation of diagram verdicts across all reports of a system.
//!
//! The same binary system is usually reported by several diagrams, and they
//! do not always agree. Each diagram is first reduced to a single
//! [`DiagramVerdict`]; [`ClassificationState`] then collects these per
//! element pair and settles them in one final pass:
//!
//! ```text
//! nonformers = true_nonformers ∪ (maybe_nonformers − formers)
//! ```
//!
//! A continuous solid solution anywhere is conclusive. Otherwise a single
//! compound-forming report outweighs any number of inconclusive ones.

use std::collections::BTreeSet;

use log::debug;

use phasemine_core::diagram::ElementPair;

use crate::classify::Verdict;

/// What one diagram says about its binary system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramVerdict {
    /// A qualifying region is a continuous solid solution.
    ContinuousSolidSolution,

    /// A qualifying region is an intermediate compound.
    CompoundForming,

    /// No qualifying region settled the question.
    Inconclusive,
}

impl DiagramVerdict {
    /// Reduces region verdicts, in drawing order, to a diagram verdict.
    ///
    /// The first decisive region wins; the rest are not consumed.
    pub fn from_regions(verdicts: impl IntoIterator<Item = Verdict>) -> Self {
        verdicts
            .into_iter()
            .find_map(Self::from_region)
            .unwrap_or(Self::Inconclusive)
    }

    /// Returns the diagram verdict a single decisive region settles on.
    pub fn from_region(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::ContinuousSolidSolution => Some(Self::ContinuousSolidSolution),
            Verdict::CompoundForming => Some(Self::CompoundForming),
            Verdict::ElementalDiscard => None,
        }
    }
}

/// Accumulates diagram verdicts per element pair.
///
/// A pair may sit in several working sets while diagrams are being recorded;
/// only [`finalize`](Self::finalize) is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationState {
    formers: BTreeSet<ElementPair>,
    true_nonformers: BTreeSet<ElementPair>,
    maybe_nonformers: BTreeSet<ElementPair>,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict of one diagram.
    pub fn record(&mut self, entry: &str, pair: ElementPair, verdict: DiagramVerdict) {
        debug!(entry = entry, pair = pair.to_string(), verdict:?; "Recorded diagram verdict");

        let set = match verdict {
            DiagramVerdict::ContinuousSolidSolution => &mut self.true_nonformers,
            DiagramVerdict::CompoundForming => &mut self.formers,
            DiagramVerdict::Inconclusive => &mut self.maybe_nonformers,
        };
        set.insert(pair);
    }

    /// Folds another state into this one.
    ///
    /// Recording diagrams into separate states and merging them yields the
    /// same final result as recording them all into one.
    pub fn merge(&mut self, other: ClassificationState) {
        self.formers.extend(other.formers);
        self.true_nonformers.extend(other.true_nonformers);
        self.maybe_nonformers.extend(other.maybe_nonformers);
    }

    pub fn formers(&self) -> &BTreeSet<ElementPair> {
        &self.formers
    }

    pub fn true_nonformers(&self) -> &BTreeSet<ElementPair> {
        &self.true_nonformers
    }

    pub fn maybe_nonformers(&self) -> &BTreeSet<ElementPair> {
        &self.maybe_nonformers
    }

    /// Returns true if no diagram has been recorded.
    pub fn is_empty(&self) -> bool {
        self.formers.is_empty()
            && self.true_nonformers.is_empty()
            && self.maybe_nonformers.is_empty()
    }

    /// Settles all recorded verdicts into the sorted list of nonformers.
    pub fn finalize(self) -> Vec<ElementPair> {
        let Self {
            formers,
            mut true_nonformers,
            maybe_nonformers,
        } = self;

        true_nonformers.extend(maybe_nonformers.difference(&formers).cloned());
        true_nonformers.into_iter().collect()
    }
}
