// File: crates/gapaxis-core/src/axis.rs
// Summary: Axis plan model: overall range, sub-ranges, VALUES/RANGES spec, and diagnostics.

use serde::{Deserialize, Serialize};

use crate::format;

/// Global min/max of the prepared column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverallRange {
    pub min: f64,
    pub max: f64,
}

impl OverallRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max of a non-empty slice sorted ascending.
    pub fn from_sorted(values: &[f64]) -> Option<Self> {
        Some(Self::new(*values.first()?, *values.last()?))
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}

/// One axis segment `[lower, upper]` in data units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubRange {
    pub lower: f64,
    pub upper: f64,
}

impl SubRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Padded bounds touch or cross: `self.upper >= next.lower`.
    pub fn overlaps_next(&self, next: &SubRange) -> bool { self.upper >= next.lower }

    /// Smallest range covering both.
    pub fn union(&self, other: &SubRange) -> SubRange {
        SubRange::new(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    pub fn contains(&self, x: f64) -> bool { x >= self.lower && x <= self.upper }
}

/// Final axis layout. Exactly one mode per plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "UPPERCASE")]
pub enum AxisSpec {
    /// Single continuous axis with a uniform increment.
    Values { start: f64, end: f64, step: f64 },
    /// 2..=4 ascending, non-overlapping segments.
    Ranges { subranges: Vec<SubRange> },
}

impl AxisSpec {
    pub fn is_ranges(&self) -> bool { matches!(self, AxisSpec::Ranges { .. }) }

    /// Segments in RANGES mode, empty otherwise.
    pub fn subranges(&self) -> &[SubRange] {
        match self {
            AxisSpec::Ranges { subranges } => subranges,
            AxisSpec::Values { .. } => &[],
        }
    }
}

/// Which planner parameter a diagnostic points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    MarPct,
    MaxGap,
}

impl Parameter {
    pub const fn label(&self) -> &'static str {
        match self {
            Parameter::MarPct => "MarPct",
            Parameter::MaxGap => "MaxGap",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Two neighbouring sub-ranges overlapped after padding and were merged
    /// across the gap `[gap_lower, gap_upper]`.
    Merged { gap_lower: f64, gap_upper: f64, adjust: Parameter },
    /// Every candidate sub-range merged into one; the plan fell back to VALUES.
    CollapsedToSingle { adjust: Parameter },
    /// The configured gap count exceeded the hard cap.
    MaxGapCapped { requested: usize, used: usize },
}

impl Diagnostic {
    /// Parameter the caller may want to revisit, if any.
    pub fn adjust(&self) -> Option<Parameter> {
        match self {
            Diagnostic::Merged { adjust, .. } | Diagnostic::CollapsedToSingle { adjust } => Some(*adjust),
            Diagnostic::MaxGapCapped { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Diagnostic::Merged { gap_lower, gap_upper, adjust } => format!(
                "sub-ranges around the gap {}..{} overlap after margins and were merged; consider adjusting {}",
                format::number(*gap_lower),
                format::number(*gap_upper),
                adjust.label()
            ),
            Diagnostic::CollapsedToSingle { adjust } => format!(
                "all sub-ranges merged into one; using a continuous axis (consider adjusting {})",
                adjust.label()
            ),
            Diagnostic::MaxGapCapped { requested, used } => {
                format!("MaxGap={} exceeds the supported maximum; using {}", requested, used)
            }
        }
    }
}

/// Result of planning one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisPlan {
    pub min: f64,
    pub max: f64,
    pub spec: AxisSpec,
    pub diagnostics: Vec<Diagnostic>,
}

impl AxisPlan {
    /// Axis option text: `VALUES=(start to end by step)` or `RANGES=(l1-u1 l2-u2 ...)`.
    pub fn option_text(&self) -> String { format::option_text(&self.spec) }
}
