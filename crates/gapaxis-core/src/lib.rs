// File: crates/gapaxis-core/src/lib.rs
// Summary: Core library entry point; exports the broken-axis planning API.

pub mod axis;
pub mod dataset;
pub mod error;
pub mod format;
pub mod gaps;
pub mod grid;
pub mod merge;
pub mod pipeline;
pub mod ranges;
pub mod types;

pub use axis::{AxisPlan, AxisSpec, Diagnostic, OverallRange, Parameter, SubRange};
pub use dataset::{prepare, prepare_values, Catalog, Cell, Column, Dataset, Prepared};
pub use error::PlanError;
pub use grid::{NiceAxis, NiceRange, RoundNumberAxis};
pub use merge::{MergeOutcome, MergeReport};
pub use pipeline::{plan_axis, Planner};
pub use types::{BreakParams, DEFAULT_CHK_PCT, DEFAULT_MAR_PCT, DEFAULT_MAX_GAP, MAX_GAP_CAP};
