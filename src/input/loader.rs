//! Load report inputs from JSON files and fixed-asset registers from CSV

use csv::Reader;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{CmaData, FixedAsset};
use crate::error::{CmaError, CmaResult};

/// Raw CSV row of a fixed-asset register
#[derive(Debug, serde::Deserialize)]
struct CsvAssetRow {
    #[serde(rename = "Id", default)]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "OpeningWDV", default)]
    opening_wdv: f64,
    #[serde(rename = "AdditionsBeforeOct", default)]
    additions_before_oct: f64,
    #[serde(rename = "AdditionsAfterOct", default)]
    additions_after_oct: f64,
    #[serde(rename = "Sales", default)]
    sales: f64,
}

impl CsvAssetRow {
    fn into_asset(self, row_number: usize) -> CmaResult<FixedAsset> {
        if self.name.trim().is_empty() {
            return Err(CmaError::invalid(
                format!("fixed asset row {}", row_number),
                "Name is empty",
            ));
        }

        Ok(FixedAsset {
            // Ids are caller-assigned; number rows when the file has none
            id: self.id.unwrap_or_else(|| row_number.to_string()),
            name: self.name.trim().to_string(),
            rate: self.rate,
            opening_wdv: self.opening_wdv,
            additions_before_oct: self.additions_before_oct,
            additions_after_oct: self.additions_after_oct,
            sales: self.sales,
        })
    }
}

/// Load and validate a report input from a JSON file
pub fn load_cma_data<P: AsRef<Path>>(path: P) -> CmaResult<CmaData> {
    let path = path.as_ref();
    debug!("Loading CMA input from {}", path.display());
    let file = File::open(path)?;
    let data = load_cma_data_from_reader(BufReader::new(file))?;
    info!(
        "Loaded CMA input for '{}' ({} fixed assets)",
        data.basic_data.business_name,
        data.fixed_assets.len()
    );
    Ok(data)
}

/// Load and validate a report input from any reader
pub fn load_cma_data_from_reader<R: Read>(reader: R) -> CmaResult<CmaData> {
    let data: CmaData = serde_json::from_reader(reader)?;
    data.validate()?;
    Ok(data)
}

/// Load a fixed-asset register from a CSV file
pub fn load_fixed_assets<P: AsRef<Path>>(path: P) -> CmaResult<Vec<FixedAsset>> {
    let path = path.as_ref();
    debug!("Loading fixed-asset register from {}", path.display());
    let file = File::open(path)?;
    load_fixed_assets_from_reader(file)
}

/// Load a fixed-asset register from any reader
pub fn load_fixed_assets_from_reader<R: Read>(reader: R) -> CmaResult<Vec<FixedAsset>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut assets = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvAssetRow = result?;
        assets.push(row.into_asset(idx + 1)?);
    }

    debug!("Read {} fixed assets", assets.len());
    Ok(assets)
}
