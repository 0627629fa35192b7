//! CSV table ingestion

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use unirank_core::dedup::normalization::{normalize_country, normalize_status};
use unirank_core::{Coordinates, InstitutionRecord};

use crate::error::{IoError, IoResult};
use crate::schema::TableSpec;

/// Read one source's CSV table into institution records
///
/// The spec and the file's header are validated up front: a configured
/// column that the file does not carry is a hard error, raised before
/// any row is read. Per-cell problems are not errors — an unparseable
/// coordinate or status just leaves that field absent, and rows with an
/// empty name cell are skipped.
pub fn read_table(path: &str, spec: &TableSpec) -> IoResult<Vec<InstitutionRecord>> {
    spec.validate()?;

    if !Path::new(path).exists() {
        return Err(IoError::FileNotFound(path.to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat {
            path: path.to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let columns = ColumnIndices::resolve(spec, &headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IoError::InvalidFormat {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let name = cell(&row, Some(columns.name));
        if name.is_empty() {
            continue;
        }

        let country = match columns.country {
            Some(idx) => normalize_country(&cell(&row, Some(idx))),
            None => spec.fixed_country.clone().unwrap_or_default(),
        };

        let mut record = InstitutionRecord::new(name, country);
        record.sources.insert(spec.source.clone());

        let rank = cell(&row, columns.rank);
        if !rank.is_empty() {
            record.ranks.insert(spec.source.clone(), rank);
        }

        record.status = normalize_status(&cell(&row, columns.status));

        if let (Some(lat_idx), Some(lon_idx)) = (columns.latitude, columns.longitude) {
            let lat = cell(&row, Some(lat_idx)).parse::<f64>();
            let lon = cell(&row, Some(lon_idx)).parse::<f64>();
            if let (Ok(latitude), Ok(longitude)) = (lat, lon) {
                record.coordinates = Some(Coordinates {
                    latitude,
                    longitude,
                });
            }
        }

        records.push(record);
    }

    Ok(records)
}

struct ColumnIndices {
    name: usize,
    country: Option<usize>,
    rank: Option<usize>,
    status: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnIndices {
    fn resolve(spec: &TableSpec, headers: &[String]) -> IoResult<Self> {
        let find = |column: &str| -> IoResult<usize> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| IoError::MissingColumn {
                    source_name: spec.source.clone(),
                    column: column.to_string(),
                    available: headers.join(", "),
                })
        };
        let find_opt = |column: &Option<String>| -> IoResult<Option<usize>> {
            column.as_deref().map(|c| find(c)).transpose()
        };

        Ok(Self {
            name: find(spec.name_column.as_str())?,
            country: find_opt(&spec.country_column)?,
            rank: find_opt(&spec.rank_column)?,
            status: find_opt(&spec.status_column)?,
            latitude: find_opt(&spec.latitude_column)?,
            longitude: find_opt(&spec.longitude_column)?,
        })
    }
}

fn cell(row: &csv::StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
