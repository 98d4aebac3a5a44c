// File: crates/gapaxis-core/src/types.rs
// Summary: Shared constants and the tunable parameters (ChkPct, MarPct, MaxGap).

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Default fraction of the overall range a gap must reach to split the axis.
pub const DEFAULT_CHK_PCT: f64 = 0.25;
/// Default fraction of a sub-range's effective range added as margin.
pub const DEFAULT_MAR_PCT: f64 = 0.10;
/// Default number of gaps to split on.
pub const DEFAULT_MAX_GAP: usize = 3;
/// Hard cap on gaps; at most `MAX_GAP_CAP + 1` sub-ranges are ever produced.
pub const MAX_GAP_CAP: usize = 3;

/// Planner parameters.
/// Contract: call [`BreakParams::validate`] (the pipeline does) before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakParams {
    /// `ChkPct`: relative size the largest gap must reach.
    pub chk_pct: f64,
    /// `MarPct`: margin as a fraction of the effective range.
    pub mar_pct: f64,
    /// `MaxGap`: requested gap count; values above [`MAX_GAP_CAP`] are capped.
    pub max_gap: usize,
}

impl BreakParams {
    pub const fn new(chk_pct: f64, mar_pct: f64, max_gap: usize) -> Self {
        Self { chk_pct, mar_pct, max_gap }
    }

    pub fn with_chk_pct(mut self, chk_pct: f64) -> Self { self.chk_pct = chk_pct; self }
    pub fn with_mar_pct(mut self, mar_pct: f64) -> Self { self.mar_pct = mar_pct; self }
    pub fn with_max_gap(mut self, max_gap: usize) -> Self { self.max_gap = max_gap; self }

    /// Gap count actually used by the selector.
    pub fn effective_max_gap(&self) -> usize { self.max_gap.min(MAX_GAP_CAP) }

    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.chk_pct.is_finite() || self.chk_pct < 0.0 || self.chk_pct > 1.0 {
            return Err(PlanError::invalid_parameter("chk_pct", format!("must be within [0, 1], got {}", self.chk_pct)));
        }
        if !self.mar_pct.is_finite() || self.mar_pct < 0.0 {
            return Err(PlanError::invalid_parameter("mar_pct", format!("must be finite and non-negative, got {}", self.mar_pct)));
        }
        if self.max_gap == 0 {
            return Err(PlanError::invalid_parameter("max_gap", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for BreakParams {
    fn default() -> Self {
        Self::new(DEFAULT_CHK_PCT, DEFAULT_MAR_PCT, DEFAULT_MAX_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let p = BreakParams::default();
        assert_eq!(p, BreakParams::new(0.25, 0.10, 3));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn max_gap_is_capped_silently() {
        let p = BreakParams::default().with_max_gap(9);
        assert!(p.validate().is_ok());
        assert_eq!(p.effective_max_gap(), 3);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(BreakParams::default().with_chk_pct(f64::NAN).validate().is_err());
        assert!(BreakParams::default().with_chk_pct(1.5).validate().is_err());
        assert!(BreakParams::default().with_mar_pct(-0.1).validate().is_err());
        assert!(BreakParams::default().with_max_gap(0).validate().is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let p: BreakParams = serde_json::from_str(r#"{ "mar_pct": 0.05 }"#).expect("parse");
        assert_eq!(p, BreakParams::default().with_mar_pct(0.05));
    }
}
