//! CSV import of listing snapshots for offline ranking runs.

use crate::decision::{DemandLevel, ListingSnapshot};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Failure while reading a listing export.
#[derive(Debug, thiserror::Error)]
pub enum ListingImportError {
    #[error("failed to read listing export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    listing_id: String,
    price: f64,
    #[serde(default, deserialize_with = "optional_number")]
    market_price: Option<f64>,
    city: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    demand_level: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    quality_score: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    photo_count: Option<i64>,
    #[serde(default, deserialize_with = "optional_number")]
    description_length: Option<i64>,
}

impl From<ListingRow> for ListingSnapshot {
    fn from(row: ListingRow) -> Self {
        Self {
            listing_id: row.listing_id,
            price: row.price,
            market_price: row.market_price,
            city: row.city,
            demand_level: row.demand_level.as_deref().and_then(DemandLevel::from_token),
            quality_score: row.quality_score,
            photo_count: row.photo_count,
            description_length: row.description_length,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    empty_string_as_none(deserializer)?
        .map(|value| value.trim().parse::<T>().map_err(serde::de::Error::custom))
        .transpose()
}

pub struct ListingCsvImporter;

impl ListingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ListingSnapshot>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ListingSnapshot>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut listings = Vec::new();
        for record in csv_reader.deserialize::<ListingRow>() {
            listings.push(ListingSnapshot::from(record?));
        }

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
listing_id,price,market_price,city,demand_level,quality_score,photo_count,description_length
berlin-1, 2700 ,3000,Berlin,High,70,6,250
leipzig-2,900,,Leipzig,unknown,,,
";

    #[test]
    fn imports_rows_with_optional_cells() {
        let listings =
            ListingCsvImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");

        assert_eq!(listings.len(), 2);
        let berlin = &listings[0];
        assert_eq!(berlin.listing_id, "berlin-1");
        assert_eq!(berlin.price, 2700.0);
        assert_eq!(berlin.market_price, Some(3000.0));
        assert_eq!(berlin.demand_level, Some(DemandLevel::High));
        assert_eq!(berlin.photo_count, Some(6));

        let leipzig = &listings[1];
        assert_eq!(leipzig.market_price, None);
        assert_eq!(leipzig.demand_level, None);
        assert_eq!(leipzig.quality_score, None);
        assert_eq!(leipzig.description_length, None);
    }

    #[test]
    fn rejects_non_numeric_price() {
        let export = "listing_id,price,market_price,city,demand_level,quality_score,photo_count,description_length\nx,cheap,,Berlin,,,,\n";
        let err = ListingCsvImporter::from_reader(Cursor::new(export)).expect_err("bad price");
        assert!(matches!(err, ListingImportError::Csv(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ListingCsvImporter::from_path("/nonexistent/listings.csv")
            .expect_err("missing file");
        assert!(matches!(err, ListingImportError::Io(_)));
    }
}
