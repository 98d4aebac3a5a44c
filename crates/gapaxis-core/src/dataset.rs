// File: crates/gapaxis-core/src/dataset.rs
// Summary: Tabular input (CSV-backed datasets, named catalog) and column preparation.
// Notes:
// - Cells keep their raw classification (missing / number / text) so that a
//   column is only rejected as non-numeric when it is actually planned.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::axis::OverallRange;
use crate::error::PlanError;

/// Markers treated as missing, compared case-insensitively after trimming.
const MISSING_MARKERS: &[&str] = &["", ".", "na", "nan", "null"];

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Classify a raw CSV field. Non-finite numbers count as missing.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m)) {
            return Cell::Missing;
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Number(v),
            Ok(_) => Cell::Missing,
            Err(_) => Cell::Text(s.to_string()),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        if v.is_finite() { Cell::Number(v) } else { Cell::Missing }
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Cell::Missing, Cell::from)
    }
}

#[derive(Clone, Debug)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self { name: name.into(), cells }
    }

    pub fn from_values<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        Self::new(name, values.into_iter().map(Into::into).collect())
    }
}

/// Named collection of equally long columns.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: Vec::new() }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    /// Exact name match first, then ASCII case-insensitive.
    pub fn column(&self, name: &str) -> Option<&Column> {
        let wanted = name.trim();
        self.columns
            .iter()
            .find(|c| c.name == wanted)
            .or_else(|| self.columns.iter().find(|c| c.name.eq_ignore_ascii_case(wanted)))
    }

    pub fn from_csv_path(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(name, file)
    }

    /// Read a headered CSV. Short rows are padded with missing cells.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, PlanError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
        for rec in rdr.records() {
            let rec = rec?;
            for (i, col) in cells.iter_mut().enumerate() {
                col.push(rec.get(i).map_or(Cell::Missing, Cell::parse));
            }
        }

        let mut ds = Dataset::new(name);
        for (h, c) in headers.into_iter().zip(cells) {
            ds.columns.push(Column::new(h, c));
        }
        debug!(dataset = %ds.name, columns = ds.columns.len(), rows = ds.row_count(), "loaded csv");
        Ok(ds)
    }
}

/// Datasets addressable by name (the "dataset handle").
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    datasets: BTreeMap<String, Dataset>,
}

impl Catalog {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, dataset: Dataset) -> Option<Dataset> {
        self.datasets.insert(dataset.name.clone(), dataset)
    }

    /// Load a CSV and register it under its file stem. Returns the name used.
    pub fn insert_csv_path(&mut self, path: impl AsRef<Path>) -> Result<String, PlanError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("data")
            .to_string();
        let ds = Dataset::from_csv_path(name.clone(), path)?;
        self.insert(ds);
        Ok(name)
    }

    pub fn get(&self, name: &str) -> Result<&Dataset, PlanError> {
        self.datasets.get(name).ok_or_else(|| PlanError::dataset_not_found(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn prepare(&self, dataset: &str, column: &str) -> Result<Prepared, PlanError> {
        prepare(self.get(dataset)?, column)
    }
}

/// Clean, ascending observations of one column.
#[derive(Clone, Debug, PartialEq)]
pub struct Prepared {
    pub column: String,
    pub values: Vec<f64>,
    pub range: OverallRange,
}

/// Drop missing cells, sort ascending, compute min/max.
pub fn prepare(dataset: &Dataset, column: &str) -> Result<Prepared, PlanError> {
    let col = dataset
        .column(column)
        .ok_or_else(|| PlanError::column_not_found(&dataset.name, column))?;

    let mut values = Vec::with_capacity(col.cells.len());
    for cell in &col.cells {
        match cell {
            Cell::Number(v) => values.push(*v),
            Cell::Missing => {}
            Cell::Text(t) => {
                return Err(PlanError::ColumnNotNumeric { column: col.name.clone(), value: t.clone() });
            }
        }
    }
    debug!(column = %col.name, kept = values.len(), missing = col.cells.len() - values.len(), "prepared column");
    prepare_values(&col.name, values)
}

/// Same as [`prepare`] for values already in memory; non-finite values count as missing.
pub fn prepare_values(column: &str, mut values: Vec<f64>) -> Result<Prepared, PlanError> {
    values.retain(|v| v.is_finite());
    values.sort_by(f64::total_cmp);
    let range = match values.len() {
        0 => return Err(PlanError::EmptyColumn { column: column.to_string() }),
        1 => return Err(PlanError::InsufficientData { column: column.to_string(), count: 1 }),
        _ => OverallRange::from_sorted(&values)
            .ok_or_else(|| PlanError::EmptyColumn { column: column.to_string() })?,
    };
    Ok(Prepared { column: column.to_string(), values, range })
}
