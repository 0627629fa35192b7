//! Merged-table CSV output

use std::fs::File;
use std::io::BufWriter;

use unirank_core::InstitutionRecord;

use crate::error::{IoError, IoResult};

/// Write the merged table: one row per institution, one rank column
/// per source in the given order
pub fn write_merged(path: &str, records: &[InstitutionRecord], sources: &[String]) -> IoResult<()> {
    let file = File::create(path).map_err(|e| IoError::WriteFailed {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let mut header = vec!["name".to_string(), "country".to_string()];
    for source in sources {
        header.push(format!("{}_rank", source));
    }
    header.push("status".to_string());
    header.push("latitude".to_string());
    header.push("longitude".to_string());

    writer.write_record(&header).map_err(|e| write_failed(path, e))?;

    for record in records {
        let mut row = vec![record.name.clone(), record.country.clone()];
        for source in sources {
            row.push(record.rank(source).unwrap_or_default().to_string());
        }
        row.push(record.status.as_str().to_string());
        match record.coordinates {
            Some(coords) => {
                row.push(coords.latitude.to_string());
                row.push(coords.longitude.to_string());
            }
            None => {
                row.push(String::new());
                row.push(String::new());
            }
        }
        writer.write_record(&row).map_err(|e| write_failed(path, e))?;
    }

    writer.flush().map_err(|e| IoError::WriteFailed {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn write_failed(path: &str, err: csv::Error) -> IoError {
    IoError::WriteFailed {
        path: path.to_string(),
        message: err.to_string(),
    }
}
