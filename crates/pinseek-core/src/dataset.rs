//! Dataset loading — reads the pincode CSV into a typed, immutable table.
//!
//! The file is read exactly once, at startup. Header names are trimmed and
//! lower-cased before lookup, so column case never matters. A missing
//! required column is fatal ([`DataError::MissingColumn`]); a row whose
//! pincode cell is not integral is skipped and counted, never loaded
//! half-parsed. Coordinate cells that are empty or non-finite load as
//! `None` and the row is kept.

use crate::error::DataError;
use crate::types::PostOffice;
use std::collections::HashMap;
use std::path::Path;

/// Columns that must be present (after lower-casing) in the dataset header.
/// Any one of them missing aborts the load.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "circlename",
    "regionname",
    "divisionname",
    "officename",
    "pincode",
    "officetype",
    "delivery",
    "district",
    "statename",
    "latitude",
    "longitude",
];

/// The in-memory pincode table. Immutable after load; row order is the
/// file's row order and is preserved by every search.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<PostOffice>,
}

impl Dataset {
    /// Load the dataset from a CSV file with a header row.
    ///
    /// Fails when the file cannot be read or a required column is absent.
    /// Rows that do not fit the [`PostOffice`] shape are dropped with a
    /// single `warn!` summarizing how many were lost.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let read_err = |source| DataError::Read { path: path.to_path_buf(), source };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(read_err)?;

        let headers = reader.headers().map_err(read_err)?.clone();
        let columns = Columns::resolve(path, &headers)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(read_err)?;
            match columns.parse_row(&row) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    // +2: one for the header row, one for 1-based numbering.
                    tracing::debug!(row = index + 2, "dropping row with non-integral pincode");
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(
                skipped,
                kept = records.len(),
                path = %path.display(),
                "dropped rows that failed to parse"
            );
        }

        Ok(Self { records })
    }

    /// Build a dataset from already-typed records. Used by tests and by
    /// anything that wants to inject a table without touching the filesystem.
    pub fn from_records(records: Vec<PostOffice>) -> Self {
        Self { records }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[PostOffice] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Resolved positions of the required columns within one file's header row.
struct Columns {
    circle: usize,
    region: usize,
    division: usize,
    office: usize,
    pincode: usize,
    office_type: usize,
    delivery: usize,
    district: usize,
    state: usize,
    latitude: usize,
    longitude: usize,
}

impl Columns {
    fn resolve(path: &Path, headers: &csv::StringRecord) -> Result<Self, DataError> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(position, name)| (name.trim().to_lowercase(), position))
            .collect();

        let col = |column: &'static str| -> Result<usize, DataError> {
            index.get(column).copied().ok_or_else(|| DataError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })
        };

        Ok(Self {
            circle: col("circlename")?,
            region: col("regionname")?,
            division: col("divisionname")?,
            office: col("officename")?,
            pincode: col("pincode")?,
            office_type: col("officetype")?,
            delivery: col("delivery")?,
            district: col("district")?,
            state: col("statename")?,
            latitude: col("latitude")?,
            longitude: col("longitude")?,
        })
    }

    /// Parse one row into the typed record shape. `None` means the row does
    /// not fit (non-integral pincode) and should be counted as skipped.
    fn parse_row(&self, row: &csv::StringRecord) -> Option<PostOffice> {
        let text = |position: usize| row.get(position).unwrap_or("").trim().to_string();
        let pincode = row.get(self.pincode)?.trim().parse().ok()?;

        Some(PostOffice {
            circle: text(self.circle),
            region: text(self.region),
            division: text(self.division),
            office: text(self.office),
            pincode,
            office_type: text(self.office_type),
            delivery: text(self.delivery),
            district: text(self.district),
            state: text(self.state),
            latitude: coordinate(row.get(self.latitude)),
            longitude: coordinate(row.get(self.longitude)),
        })
    }
}

/// Parse a coordinate cell. Empty, unparsable, and non-finite values (NaN
/// in particular) all load as `None`.
fn coordinate(cell: Option<&str>) -> Option<f64> {
    let value: f64 = cell?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
