//! Per-source table column mapping

use serde::Deserialize;

use crate::error::{IoError, IoResult};

/// Column mapping for one source's CSV table
///
/// Sources disagree on column names ("Region" vs "Country" vs
/// "location") and some tables carry no country column at all; the
/// spec names the columns to read and the source id that keys this
/// table's rank values.
#[derive(Clone, Debug, Deserialize)]
pub struct TableSpec {
    /// Source id ("qs", "the", "usnews", ...); keys the rank column
    /// in merged records
    pub source: String,
    /// Column holding the institution name
    pub name_column: String,
    /// Column holding the country/region, if the table has one
    #[serde(default)]
    pub country_column: Option<String>,
    /// Country applied to every row when the table has no country
    /// column (e.g. a single-country ranking)
    #[serde(default)]
    pub fixed_country: Option<String>,
    #[serde(default)]
    pub rank_column: Option<String>,
    #[serde(default)]
    pub status_column: Option<String>,
    #[serde(default)]
    pub latitude_column: Option<String>,
    #[serde(default)]
    pub longitude_column: Option<String>,
}

impl TableSpec {
    /// Check the spec is internally consistent, before any file I/O
    pub fn validate(&self) -> IoResult<()> {
        if self.source.trim().is_empty() {
            return Err(self.invalid("source id must not be empty"));
        }
        if self.name_column.trim().is_empty() {
            return Err(self.invalid("name_column must not be empty"));
        }
        if self.country_column.is_none() && self.fixed_country.is_none() {
            return Err(self.invalid("either country_column or fixed_country is required"));
        }
        if self.country_column.is_some() && self.fixed_country.is_some() {
            return Err(self.invalid("country_column and fixed_country are mutually exclusive"));
        }
        if self.latitude_column.is_some() != self.longitude_column.is_some() {
            return Err(self.invalid("latitude_column and longitude_column must be set together"));
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> IoError {
        IoError::InvalidSpec {
            source_name: self.source.clone(),
            message: message.to_string(),
        }
    }
}
