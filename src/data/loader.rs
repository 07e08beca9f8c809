use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Required columns
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

/// Schema violations in the source file. Any of these is fatal for the load;
/// the dashboard never starts on a malformed dataset.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: '{value}' is not a valid payload mass")]
    BadPayload { row: usize, value: String },
    #[error("row {row}: class value '{value}' is not 0 or 1")]
    BadClass { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the four required columns (primary format)
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            load_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            load_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least the four required columns; any
/// extra columns are ignored.
fn load_csv<R: Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &'static str| -> Result<usize, SchemaError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(SchemaError::MissingColumn(name))
    };
    let site_idx = col(COL_SITE)?;
    let payload_idx = col(COL_PAYLOAD)?;
    let class_idx = col(COL_CLASS)?;
    let booster_idx = col(COL_BOOSTER)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let payload_raw = record.get(payload_idx).unwrap_or("").trim();
        let payload_mass_kg: f64 =
            payload_raw.parse().map_err(|_| SchemaError::BadPayload {
                row: row_no,
                value: payload_raw.to_string(),
            })?;

        let class_raw = record.get(class_idx).unwrap_or("").trim();
        let outcome = class_raw
            .parse::<i64>()
            .ok()
            .and_then(Outcome::from_class)
            .ok_or_else(|| SchemaError::BadClass {
                row: row_no,
                value: class_raw.to_string(),
            })?;

        records.push(LaunchRecord {
            site: record.get(site_idx).unwrap_or("").to_string(),
            payload_mass_kg,
            outcome,
            booster_category: record.get(booster_idx).unwrap_or("").to_string(),
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One row as it appears in the interchange formats. Extra keys are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(text: &str) -> Result<LaunchDataset> {
    let rows: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, raw) in rows.into_iter().enumerate() {
        let outcome =
            Outcome::from_class(raw.class).ok_or_else(|| SchemaError::BadClass {
                row: i,
                value: raw.class.to_string(),
            })?;

        records.push(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_category: raw.booster_category,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category
1,CCAFS LC-40,500.0,0,v1.0
2,CCAFS LC-40,2500.0,1,FT
3,KSC LC-39A,3200.5,1,B4
";

    #[test]
    fn csv_parses_required_columns_and_ignores_extras() {
        let ds = load_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.records[1].outcome, Outcome::Success);
        assert_eq!(ds.records[2].payload_mass_kg, 3200.5);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 3200.5);
    }

    #[test]
    fn csv_missing_column_is_fatal() {
        let bad = "Launch Site,class\nCCAFS LC-40,1\n";
        let err = load_csv(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Payload Mass (kg)"));
    }

    #[test]
    fn csv_bad_class_value_is_fatal() {
        let bad = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,500.0,2,v1.0
";
        let err = load_csv(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("not 0 or 1"));
    }

    #[test]
    fn json_records_roundtrip() {
        let text = r#"[
            {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 1100.0,
             "class": 1, "Booster Version Category": "FT"}
        ]"#;
        let ds = load_json(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].site, "VAFB SLC-4E");
        assert!(ds.records[0].outcome.is_success());
    }

    #[test]
    fn json_missing_key_is_fatal() {
        let text = r#"[{"Launch Site": "VAFB SLC-4E"}]"#;
        assert!(load_json(text).is_err());
    }
}
