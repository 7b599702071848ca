// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loading location records from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::record::LocationRecord;

/// Object keys that may hold the record array.
const ARRAY_KEYS: [&str; 2] = ["goldfishLocations", "locations"];

/// Errors that can occur while loading a data set.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid location data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected an array of locations or an object with a \"goldfishLocations\" array")]
    UnexpectedShape,
}

/// Parse a data set from JSON text.
///
/// Accepts a bare array of records or an object holding the array under
/// `goldfishLocations` or `locations`. Elements that are not usable records
/// (no `name`, not an object) are logged and skipped; the rest still load.
pub fn parse(json: &str) -> Result<Vec<LocationRecord>, DatasetError> {
    let value: Value = serde_json::from_str(json)?;
    let array = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match ARRAY_KEYS.iter().find_map(|key| object.remove(*key)) {
            Some(Value::Array(items)) => items,
            _ => return Err(DatasetError::UnexpectedShape),
        },
        _ => return Err(DatasetError::UnexpectedShape),
    };

    let total = array.len();
    let records: Vec<LocationRecord> = array
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping location #{index}: {e}");
                None
            }
        })
        .collect();
    if records.len() < total {
        warn!("Skipped {} of {total} locations", total - records.len());
    }
    Ok(records)
}

/// Read and parse a data set file.
pub fn load_from_path(path: &Path) -> Result<Vec<LocationRecord>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse(&text)?;
    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_parse_bare_array() {
        let records = parse(r#"[{"name": "A", "lat": 35, "lng": "139"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].position().is_some());
    }

    #[test]
    fn test_parse_wrapped_array() {
        let json = r#"{"goldfishLocations": [{"name": "A"}, {"name": "B"}]}"#;
        assert_eq!(parse(json).unwrap().len(), 2);
        let json = r#"{"locations": []}"#;
        assert!(parse(json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(parse("42"), Err(DatasetError::UnexpectedShape)));
        assert!(matches!(parse(r#"{"sites": []}"#), Err(DatasetError::UnexpectedShape)));
        assert!(matches!(parse(r#"{"locations": {}}"#), Err(DatasetError::UnexpectedShape)));
        assert!(matches!(parse("not json"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_parse_keeps_good_records_beside_malformed_ones() {
        let json = r#"[
            {"name": "Good", "lat": 35.0, "lng": 139.0, "category": "池"},
            {"name": "Bool lat", "lat": true, "lng": 139.0},
            {"name": "Null category", "lat": 34.0, "lng": 135.0, "category": null, "pref": null},
            {"lat": 1},
            "not a record"
        ]"#;
        let records = parse(json).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Good", "Bool lat", "Null category"]);

        assert!(records[0].position().is_some());
        assert_eq!(records[1].position(), None);
        assert!(records[2].position().is_some());
        assert_eq!(Category::bucket(&records[2].category), Category::Other);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_from_path(Path::new("/nonexistent/goldfish.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/goldfish.json"));
    }

    #[test]
    fn test_load_bundled_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/goldfish_locations.json");
        let records = load_from_path(&path).unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r.position().is_none()));
    }
}
