// File: crates/gapaxis-core/src/gaps.rs
// Summary: Gap analysis over sorted observations and selection of the split gaps.

use std::cmp::Ordering;

use crate::axis::OverallRange;

/// Whitespace between two consecutive sorted observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gap {
    /// Position of `upper` in the sorted observations (always >= 1).
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
}

impl Gap {
    pub fn size(&self) -> f64 { self.upper - self.lower }
}

/// A selected gap together with its size rank (0 = largest).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedGap {
    pub gap: Gap,
    pub rank: usize,
}

#[derive(Clone, Debug)]
pub struct GapAnalysis {
    pub range: OverallRange,
    /// Minimum size for a gap to count as qualifying (`span * chk_pct`).
    pub threshold: f64,
    /// All consecutive gaps in positional order.
    pub gaps: Vec<Gap>,
}

impl GapAnalysis {
    pub fn largest(&self) -> Option<&Gap> {
        self.gaps.iter().max_by(|a, b| a.size().total_cmp(&b.size()))
    }

    pub fn qualifies(&self, gap: &Gap) -> bool { gap.size() >= self.threshold }

    /// True when the axis is worth splitting at all. A zero span never is.
    pub fn has_qualifying_gap(&self) -> bool {
        if self.range.span() <= 0.0 { return false; }
        self.largest().is_some_and(|g| g.size() > 0.0 && self.qualifies(g))
    }

    /// Number of individually qualifying gaps (informational).
    pub fn qualifying_count(&self) -> usize {
        if self.range.span() <= 0.0 { return 0; }
        self.gaps.iter().filter(|g| g.size() > 0.0 && self.qualifies(g)).count()
    }
}

/// Compute consecutive gaps of `sorted` (ascending) and the qualifying threshold.
pub fn analyze(sorted: &[f64], range: OverallRange, chk_pct: f64) -> GapAnalysis {
    let gaps = sorted
        .windows(2)
        .enumerate()
        .map(|(i, w)| Gap { index: i + 1, lower: w[0], upper: w[1] })
        .collect();
    GapAnalysis { range, threshold: range.span() * chk_pct, gaps }
}

/// Size descending; ties keep the lower position first.
fn by_rank(a: &Gap, b: &Gap) -> Ordering {
    b.size().total_cmp(&a.size()).then(a.index.cmp(&b.index))
}

/// Take the `max_gap` largest non-empty gaps by rank and return them in
/// positional order. Only the largest gap has to qualify; the rest are chosen
/// by rank alone. Returns nothing when the analysis has no qualifying gap.
pub fn select_gaps(analysis: &GapAnalysis, max_gap: usize) -> Vec<RankedGap> {
    if !analysis.has_qualifying_gap() { return Vec::new(); }

    let mut ranked: Vec<Gap> = analysis.gaps.iter().copied().filter(|g| g.size() > 0.0).collect();
    ranked.sort_by(by_rank);
    ranked.truncate(max_gap);

    let mut chosen: Vec<RankedGap> = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, gap)| RankedGap { gap, rank })
        .collect();
    chosen.sort_by_key(|r| r.gap.index);
    chosen
}
