// File: crates/gapaxis-core/src/grid.rs
// Summary: Nice-axis collaborator: round start/end/step covering a set of values.

use serde::{Deserialize, Serialize};

/// Round bounds and increment for a continuous (VALUES) axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NiceRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

/// Picks human-friendly bounds and increment covering `values`.
/// Implementations must return `start <= min(values)`, `end >= max(values)`
/// and a positive `step`.
pub trait NiceAxis {
    fn id(&self) -> &'static str;
    fn nice_axis(&self, values: &[f64]) -> NiceRange;
}

/// Default helper: steps of 1, 2, 5 or 10 times a power of ten, aiming for a
/// tick count between `min_ticks` and `max_ticks`.
#[derive(Clone, Debug)]
pub struct RoundNumberAxis {
    pub min_ticks: usize,
    pub max_ticks: usize,
}

impl Default for RoundNumberAxis {
    fn default() -> Self {
        Self { min_ticks: 4, max_ticks: 10 }
    }
}

impl NiceAxis for RoundNumberAxis {
    fn id(&self) -> &'static str { "round-number" }

    fn nice_axis(&self, values: &[f64]) -> NiceRange {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return NiceRange { start: 0.0, end: 1.0, step: 1.0 };
        }

        if (hi - lo).abs() < 1e-12 {
            // single value: one step of its own magnitude on either side
            let step = if lo == 0.0 { 1.0 } else { magnitude(lo.abs()) };
            let d = decimals(step);
            return NiceRange {
                start: round_to((lo / step).floor() * step - step, d),
                end: round_to((hi / step).ceil() * step + step, d),
                step,
            };
        }

        let target = ((self.min_ticks + self.max_ticks) / 2).max(2) as f64;
        let rough_step = (hi - lo) / target;

        let mag = magnitude(rough_step);
        let normalized = rough_step / mag;
        let nice_factor = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

        let step = nice_factor * mag;
        let d = decimals(step);
        NiceRange {
            start: round_to((lo / step).floor() * step, d),
            end: round_to((hi / step).ceil() * step, d),
            step: round_to(step, d),
        }
    }
}

fn magnitude(x: f64) -> f64 { 10f64.powf(x.log10().floor()) }

/// Decimal places needed to print multiples of `step` exactly.
fn decimals(step: f64) -> i32 {
    let e = step.log10().floor() as i32;
    if e < 0 { -e } else { 0 }
}

fn round_to(x: f64, d: i32) -> f64 {
    let p = 10f64.powi(d);
    (x * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_hundred() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let r = RoundNumberAxis::default().nice_axis(&values);
        assert_eq!(r, NiceRange { start: 0.0, end: 100.0, step: 20.0 });
    }

    #[test]
    fn fractional_range_rounds_cleanly() {
        let r = RoundNumberAxis::default().nice_axis(&[0.13, 0.91]);
        assert_eq!(r.step, 0.2);
        assert_eq!(r.start, 0.0);
        assert_eq!(r.end, 1.0);
    }

    #[test]
    fn covers_negative_values() {
        let r = RoundNumberAxis::default().nice_axis(&[-37.0, 12.0]);
        assert!(r.start <= -37.0 && r.end >= 12.0);
        assert!(r.step > 0.0);
    }

    #[test]
    fn single_value_gets_a_window() {
        let r = RoundNumberAxis::default().nice_axis(&[5.0, 5.0]);
        assert_eq!(r, NiceRange { start: 4.0, end: 6.0, step: 1.0 });
        let r = RoundNumberAxis::default().nice_axis(&[0.0]);
        assert_eq!(r, NiceRange { start: -1.0, end: 1.0, step: 1.0 });
    }

    #[test]
    fn empty_input_is_unit_axis() {
        let r = RoundNumberAxis::default().nice_axis(&[]);
        assert_eq!(r, NiceRange { start: 0.0, end: 1.0, step: 1.0 });
    }
}
