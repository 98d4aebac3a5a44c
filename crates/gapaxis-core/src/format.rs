// File: crates/gapaxis-core/src/format.rs
// Summary: Textual axis options (VALUES= / RANGES=) for downstream plotting calls.

use crate::axis::AxisSpec;

/// Significant digits kept when printing bounds; enough to drop float noise
/// (`0.1 + 0.2`) without losing small-scale data.
const SIGNIFICANT: usize = 12;

/// Render a number compactly in plain decimal form, rounded to
/// [`SIGNIFICANT`] digits relative to its own magnitude.
pub fn number(v: f64) -> String {
    if !v.is_finite() { return v.to_string(); }
    let rounded = format!("{:.*e}", SIGNIFICANT - 1, v).parse::<f64>().unwrap_or(v);
    if rounded == 0.0 { "0".to_string() } else { rounded.to_string() }
}

pub fn option_text(spec: &AxisSpec) -> String {
    match spec {
        AxisSpec::Values { start, end, step } => {
            format!("VALUES=({} to {} by {})", number(*start), number(*end), number(*step))
        }
        AxisSpec::Ranges { subranges } => {
            let parts: Vec<String> = subranges
                .iter()
                .map(|r| format!("{}-{}", number(r.lower), number(r.upper)))
                .collect();
            format!("RANGES=({})", parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::SubRange;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(number(20.0), "20");
        assert_eq!(number(-3.0), "-3");
        assert_eq!(number(0.30000000000000004), "0.3");
        assert_eq!(number(54.8), "54.8");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(1e15), "1000000000000000");
    }

    #[test]
    fn small_magnitudes_keep_their_digits() {
        assert_eq!(number(6e-8), "0.00000006");
        assert_eq!(number(-0.0000001), "-0.0000001");
        assert_eq!(number(3e-7 + 4e-8), "0.00000034");
        assert_eq!(number(4.96e-6), "0.00000496");
    }

    #[test]
    fn values_text() {
        let spec = AxisSpec::Values { start: 0.0, end: 100.0, step: 20.0 };
        assert_eq!(option_text(&spec), "VALUES=(0 to 100 by 20)");
    }

    #[test]
    fn ranges_text() {
        let spec = AxisSpec::Ranges {
            subranges: vec![SubRange::new(0.2, 5.8), SubRange::new(49.2, 54.8)],
        };
        assert_eq!(option_text(&spec), "RANGES=(0.2-5.8 49.2-54.8)");
    }

    #[test]
    fn negative_bounds_keep_their_sign_after_the_dash() {
        let spec = AxisSpec::Ranges {
            subranges: vec![SubRange::new(-10.0, -5.0), SubRange::new(-0.5, 5.0)],
        };
        assert_eq!(option_text(&spec), "RANGES=(-10--5 -0.5-5)");
    }
}
