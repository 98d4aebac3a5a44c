// File: crates/gapaxis-core/src/merge.rs
// Summary: Merge padded sub-ranges whose margins overlap; collapse to a single axis when all merge.
// Notes:
// - Overlap is treated as an edge between neighbours on a line of at most
//   four nodes; connected runs become one sub-range. This covers every
//   combination for one, two and three gaps without per-case tables.

use tracing::warn;

use crate::axis::{Diagnostic, Parameter, SubRange};

/// The gap separating two neighbouring candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Break {
    pub lower: f64,
    pub upper: f64,
    /// Whether the gap cleared the ChkPct threshold on its own.
    pub qualifying: bool,
}

impl Break {
    /// Parameter to revisit when this break is merged away: a qualifying gap
    /// swallowed by padding points at MarPct, a rank-only split at MaxGap.
    pub fn adjust(&self) -> Parameter {
        if self.qualifying { Parameter::MarPct } else { Parameter::MaxGap }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MergeOutcome {
    /// 2..=4 ascending, pairwise separated sub-ranges.
    Ranges(Vec<SubRange>),
    /// Everything merged into one; use a continuous axis.
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MergeReport {
    pub outcome: MergeOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

struct Run {
    range: SubRange,
    /// Index of the last original sub-range in this run.
    last: usize,
}

/// Merge connected runs of overlapping neighbours until none overlap.
/// `breaks[i]` separates `padded[i]` and `padded[i + 1]`.
pub fn merge_overlaps(padded: &[SubRange], breaks: &[Break]) -> MergeReport {
    debug_assert_eq!(breaks.len() + 1, padded.len().max(1));
    let mut runs: Vec<Run> = padded
        .iter()
        .enumerate()
        .map(|(i, r)| Run { range: *r, last: i })
        .collect();
    let mut diagnostics = Vec::new();
    let mut merged_qualifying = false;

    while let Some(i) = runs.windows(2).position(|w| w[0].range.overlaps_next(&w[1].range)) {
        let next = runs.remove(i + 1);
        let brk = breaks[runs[i].last];
        runs[i].range = runs[i].range.union(&next.range);
        runs[i].last = next.last;
        merged_qualifying |= brk.qualifying;

        let d = Diagnostic::Merged { gap_lower: brk.lower, gap_upper: brk.upper, adjust: brk.adjust() };
        warn!(gap_lower = brk.lower, gap_upper = brk.upper, remaining = runs.len(), "{}", d.message());
        diagnostics.push(d);
    }

    let outcome = if runs.len() < 2 {
        let adjust = if merged_qualifying { Parameter::MarPct } else { Parameter::MaxGap };
        if !padded.is_empty() {
            let d = Diagnostic::CollapsedToSingle { adjust };
            warn!("{}", d.message());
            diagnostics.push(d);
        }
        MergeOutcome::Fallback
    } else {
        MergeOutcome::Ranges(runs.into_iter().map(|r| r.range).collect())
    };
    MergeReport { outcome, diagnostics }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brk(lower: f64, upper: f64, qualifying: bool) -> Break {
        Break { lower, upper, qualifying }
    }

    fn r(l: f64, u: f64) -> SubRange { SubRange::new(l, u) }

    /// Four unit ranges at 0, 10, 20, 30; `overlap[i]` widens range i+1
    /// leftwards so that it touches range i.
    fn line_of_four(overlap: [bool; 3]) -> (Vec<SubRange>, Vec<Break>) {
        let mut ranges = vec![r(0.0, 1.0), r(10.0, 11.0), r(20.0, 21.0), r(30.0, 31.0)];
        for (i, o) in overlap.iter().enumerate() {
            if *o { ranges[i + 1].lower = ranges[i].upper - 0.5; }
        }
        let breaks = (0..3).map(|i| brk(ranges[i].upper, ranges[i + 1].lower, true)).collect();
        (ranges, breaks)
    }

    #[test]
    fn two_ranges_overlapping_fall_back() {
        let rep = merge_overlaps(&[r(0.0, 6.0), r(5.0, 9.0)], &[brk(4.0, 7.0, true)]);
        assert_eq!(rep.outcome, MergeOutcome::Fallback);
        assert_eq!(rep.diagnostics.len(), 2);
        assert!(matches!(rep.diagnostics[1], Diagnostic::CollapsedToSingle { adjust: Parameter::MarPct }));
    }

    #[test]
    fn two_ranges_separate_are_kept() {
        let rep = merge_overlaps(&[r(0.0, 4.0), r(5.0, 9.0)], &[brk(3.0, 6.0, true)]);
        assert_eq!(rep.outcome, MergeOutcome::Ranges(vec![r(0.0, 4.0), r(5.0, 9.0)]));
        assert!(rep.diagnostics.is_empty());
    }

    #[test]
    fn three_ranges_truth_table() {
        let ranges = |a: bool, b: bool| {
            let mut v = vec![r(0.0, 1.0), r(10.0, 11.0), r(20.0, 21.0)];
            if a { v[1].lower = 0.5; }
            if b { v[2].lower = 10.5; }
            v
        };
        let breaks = [brk(1.0, 10.0, true), brk(11.0, 20.0, true)];

        let rep = merge_overlaps(&ranges(true, true), &breaks);
        assert_eq!(rep.outcome, MergeOutcome::Fallback);

        let rep = merge_overlaps(&ranges(true, false), &breaks);
        assert_eq!(rep.outcome, MergeOutcome::Ranges(vec![r(0.0, 11.0), r(20.0, 21.0)]));

        let rep = merge_overlaps(&ranges(false, true), &breaks);
        assert_eq!(rep.outcome, MergeOutcome::Ranges(vec![r(0.0, 1.0), r(10.0, 21.0)]));

        let rep = merge_overlaps(&ranges(false, false), &breaks);
        assert_eq!(rep.outcome, MergeOutcome::Ranges(ranges(false, false)));
    }

    #[test]
    fn four_ranges_all_combinations() {
        for mask in 0u8..8 {
            let overlap = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0];
            let (ranges, breaks) = line_of_four(overlap);
            let rep = merge_overlaps(&ranges, &breaks);
            let merges = overlap.iter().filter(|o| **o).count();
            match rep.outcome {
                MergeOutcome::Fallback => assert_eq!(merges, 3, "mask {mask}"),
                MergeOutcome::Ranges(out) => {
                    assert_eq!(out.len(), 4 - merges, "mask {mask}");
                    assert!(out.windows(2).all(|w| w[0].upper < w[1].lower), "mask {mask}");
                    assert_eq!(out[0].lower, 0.0);
                    assert_eq!(out[out.len() - 1].upper, 31.0);
                }
            }
            let merged = rep.diagnostics.iter().filter(|d| matches!(d, Diagnostic::Merged { .. })).count();
            assert_eq!(merged, merges, "mask {mask}");
        }
    }

    #[test]
    fn outer_pairs_merge_independently() {
        let (ranges, breaks) = line_of_four([true, false, true]);
        let rep = merge_overlaps(&ranges, &breaks);
        assert_eq!(rep.outcome, MergeOutcome::Ranges(vec![r(0.0, 11.0), r(20.0, 31.0)]));
    }

    #[test]
    fn rank_only_split_points_at_max_gap() {
        let rep = merge_overlaps(
            &[r(-1.0, 1.5), r(0.5, 4.5), r(30.0, 40.0)],
            &[brk(0.0, 1.0, false), brk(4.0, 31.0, true)],
        );
        assert_eq!(rep.outcome, MergeOutcome::Ranges(vec![r(-1.0, 4.5), r(30.0, 40.0)]));
        assert_eq!(rep.diagnostics.len(), 1);
        assert_eq!(rep.diagnostics[0].adjust(), Some(Parameter::MaxGap));
    }

    #[test]
    fn wide_margin_cascades_across_runs() {
        // after 2 and 3 merge, the run's lower reaches back over range 1
        let rep = merge_overlaps(
            &[r(0.0, 2.0), r(5.0, 6.0), r(5.5, 9.0)],
            &[brk(1.0, 5.5, true), brk(5.8, 6.0, false)],
        );
        assert_eq!(rep.outcome, MergeOutcome::Ranges(vec![r(0.0, 2.0), r(5.0, 9.0)]));

        let rep = merge_overlaps(
            &[r(0.0, 2.0), r(5.0, 6.0), r(1.0, 9.0)],
            &[brk(1.0, 5.5, true), brk(5.8, 6.0, false)],
        );
        assert_eq!(rep.outcome, MergeOutcome::Fallback);
    }
}
