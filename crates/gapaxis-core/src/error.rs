// File: crates/gapaxis-core/src/error.rs
// Summary: Error type for dataset resolution, column preparation, and parameter validation.

use thiserror::Error;

/// Failures that abort planning before any axis is produced.
///
/// Merges of overlapping sub-ranges are not errors; they are reported as
/// [`crate::axis::Diagnostic`]s on the returned plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The dataset handle does not resolve in the catalog.
    #[error("dataset not found: {name}")]
    DatasetNotFound {
        /// Requested dataset name.
        name: String,
    },

    /// The dataset exists but has no column with this name.
    #[error("column '{column}' not found in dataset '{dataset}'")]
    ColumnNotFound {
        /// Dataset that was searched.
        dataset: String,
        /// Requested column name.
        column: String,
    },

    /// A present cell in the column could not be read as a number.
    #[error("column '{column}' is not numeric (found '{value}')")]
    ColumnNotNumeric {
        column: String,
        value: String,
    },

    /// Every value in the column is missing.
    #[error("column '{column}' has no non-missing values")]
    EmptyColumn {
        column: String,
    },

    /// Too few observations to compute any gap.
    #[error("column '{column}' has {count} non-missing value(s); at least 2 are required")]
    InsufficientData {
        column: String,
        count: usize,
    },

    /// A planner parameter is out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    pub fn dataset_not_found(name: impl Into<String>) -> Self {
        Self::DatasetNotFound { name: name.into() }
    }

    pub fn column_not_found(dataset: impl Into<String>, column: impl Into<String>) -> Self {
        Self::ColumnNotFound { dataset: dataset.into(), column: column.into() }
    }

    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }

    /// True for the two "handle does not resolve" kinds.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DatasetNotFound { .. } | Self::ColumnNotFound { .. })
    }
}
