// File: crates/gapaxis-core/src/pipeline.rs
// Summary: End-to-end planner: prepare -> analyze gaps -> build ranges -> merge -> VALUES/RANGES plan.

use tracing::{debug, info, warn};

use crate::axis::{AxisPlan, AxisSpec, Diagnostic};
use crate::dataset::{prepare, prepare_values, Catalog, Dataset, Prepared};
use crate::error::PlanError;
use crate::gaps::{analyze, select_gaps};
use crate::grid::{NiceAxis, RoundNumberAxis};
use crate::merge::{merge_overlaps, Break, MergeOutcome};
use crate::ranges::build_ranges;
use crate::types::BreakParams;

/// Planner configured with parameters and a nice-axis helper for the
/// continuous fallback. Stateless between calls.
#[derive(Clone, Debug, Default)]
pub struct Planner<N: NiceAxis = RoundNumberAxis> {
    pub params: BreakParams,
    pub nice: N,
}

impl Planner<RoundNumberAxis> {
    pub fn new(params: BreakParams) -> Self {
        Self { params, nice: RoundNumberAxis::default() }
    }
}

impl<N: NiceAxis> Planner<N> {
    pub fn with_nice_axis(params: BreakParams, nice: N) -> Self {
        Self { params, nice }
    }

    /// Resolve `dataset` in `catalog`, then plan `column`.
    pub fn plan_in_catalog(&self, catalog: &Catalog, dataset: &str, column: &str) -> Result<AxisPlan, PlanError> {
        self.plan(&catalog.prepare(dataset, column)?)
    }

    pub fn plan_column(&self, dataset: &Dataset, column: &str) -> Result<AxisPlan, PlanError> {
        self.plan(&prepare(dataset, column)?)
    }

    pub fn plan_values(&self, column: &str, values: Vec<f64>) -> Result<AxisPlan, PlanError> {
        self.plan(&prepare_values(column, values)?)
    }

    /// Parameters are validated here, once per plan.
    #[tracing::instrument(skip_all, fields(column = %prepared.column, n = prepared.values.len()))]
    pub fn plan(&self, prepared: &Prepared) -> Result<AxisPlan, PlanError> {
        let params = &self.params;
        params.validate()?;
        let range = prepared.range;
        let mut diagnostics = Vec::new();

        let max_gap = params.effective_max_gap();
        if max_gap < params.max_gap {
            let d = Diagnostic::MaxGapCapped { requested: params.max_gap, used: max_gap };
            warn!("{}", d.message());
            diagnostics.push(d);
        }

        let analysis = analyze(&prepared.values, range, params.chk_pct);
        let chosen = select_gaps(&analysis, max_gap);
        debug!(
            gaps = analysis.gaps.len(),
            threshold = analysis.threshold,
            qualifying = analysis.qualifying_count(),
            largest = ?analysis.largest().map(|g| g.size()),
            chosen = chosen.len(),
            "gap analysis"
        );

        let spec = if chosen.is_empty() {
            info!("no qualifying gap; continuous axis");
            self.values_spec(&prepared.values)
        } else {
            let candidates = build_ranges(range, &chosen, params.mar_pct);
            let padded: Vec<_> = candidates.iter().map(|c| c.padded).collect();
            let breaks: Vec<Break> = chosen
                .iter()
                .map(|c| Break { lower: c.gap.lower, upper: c.gap.upper, qualifying: analysis.qualifies(&c.gap) })
                .collect();

            let report = merge_overlaps(&padded, &breaks);
            diagnostics.extend(report.diagnostics);
            match report.outcome {
                MergeOutcome::Ranges(subranges) => {
                    info!(count = subranges.len(), "broken axis");
                    AxisSpec::Ranges { subranges }
                }
                MergeOutcome::Fallback => self.values_spec(&prepared.values),
            }
        };

        Ok(AxisPlan { min: range.min, max: range.max, spec, diagnostics })
    }

    fn values_spec(&self, values: &[f64]) -> AxisSpec {
        let r = self.nice.nice_axis(values);
        debug!(helper = self.nice.id(), start = r.start, end = r.end, step = r.step, "nice axis");
        AxisSpec::Values { start: r.start, end: r.end, step: r.step }
    }
}

/// Plan in-memory values with the default nice-axis helper.
pub fn plan_axis(values: &[f64], params: BreakParams) -> Result<AxisPlan, PlanError> {
    Planner::new(params).plan_values("values", values.to_vec())
}
