// File: crates/gapaxis-core/src/ranges.rs
// Summary: Candidate sub-ranges between chosen gaps, effective ranges, and margin padding.

use tracing::debug;

use crate::axis::{OverallRange, SubRange};
use crate::gaps::RankedGap;

/// Relative tolerance below which a gap-span counts as zero.
const SPAN_EPS: f64 = 1e-12;

/// One sub-range before and after padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Data extent: `min`/`max` at the ends, gap boundaries in between.
    pub left: f64,
    pub right: f64,
    /// Span the margin is scaled from.
    pub effective: f64,
    pub padded: SubRange,
}

impl Candidate {
    pub fn raw_span(&self) -> f64 { self.right - self.left }
}

/// Gap-span of each chosen gap: the overall span minus the whitespace of every
/// chosen gap ranked at or above it. A zero result (only single points left)
/// falls back to the gap's own size.
pub fn gap_spans(range: OverallRange, chosen: &[RankedGap]) -> Vec<f64> {
    let span = range.span();
    chosen
        .iter()
        .map(|c| {
            let abandoned: f64 = chosen
                .iter()
                .filter(|o| o.rank <= c.rank)
                .map(|o| o.gap.size())
                .sum();
            let e = span - abandoned;
            if e <= span * SPAN_EPS { c.gap.size() } else { e }
        })
        .collect()
}

/// Build the `chosen.len() + 1` padded sub-ranges. `chosen` must be in
/// positional order, as returned by [`crate::gaps::select_gaps`].
///
/// End sub-ranges scale their margin by their own raw span, or by the size of
/// their only neighbouring gap when they hold a single point. Interior ones
/// take the larger of the two flanking gap-spans.
pub fn build_ranges(range: OverallRange, chosen: &[RankedGap], mar_pct: f64) -> Vec<Candidate> {
    if chosen.is_empty() { return Vec::new(); }
    let spans = gap_spans(range, chosen);
    let k = chosen.len();

    (0..=k)
        .map(|i| {
            let left = if i == 0 { range.min } else { chosen[i - 1].gap.upper };
            let right = if i == k { range.max } else { chosen[i].gap.lower };
            let effective = if i == 0 || i == k {
                let raw = right - left;
                let neighbour = if i == 0 { &chosen[0] } else { &chosen[k - 1] };
                if raw > 0.0 { raw } else { neighbour.gap.size() }
            } else {
                spans[i - 1].max(spans[i])
            };
            let margin = effective * mar_pct;
            let cand = Candidate { left, right, effective, padded: SubRange::new(left - margin, right + margin) };
            debug!(index = i, left, right, effective, margin, "candidate sub-range");
            cand
        })
        .collect()
}
