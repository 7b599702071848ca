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

//! Location records as supplied by the external data source.
//!
//! Records are deserialized as-is and never mutated. Coordinates may arrive as
//! JSON numbers or numeric strings, and may be malformed; [`LocationRecord::position`]
//! is the single place where they are coerced.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Text shown when a record carries neither `description` nor `desc`.
pub const NO_DETAILS_PLACEHOLDER: &str = "no details available";

/// A geographic coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A coordinate exactly as it appeared in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    Number(f64),
    Text(String),
    /// Any other JSON value (`true`, arrays, objects); never a valid coordinate.
    Other(Value),
}

impl RawCoordinate {
    /// Coerce to a finite number.
    ///
    /// Text follows the browser `parseFloat` rule: leading whitespace is
    /// skipped and the longest numeric prefix is used, so `"35.5N"` yields
    /// `35.5` while `"abc"` yields `None`.
    #[must_use]
    pub fn to_degrees(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => parse_float_prefix(text)?,
            Self::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawCoordinate {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawCoordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Parse the longest leading decimal number in `text`.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().ok()
}

/// One point of interest in the source data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Display title.
    pub name: String,

    #[serde(default)]
    pub lat: Option<RawCoordinate>,

    #[serde(default)]
    pub lng: Option<RawCoordinate>,

    /// Category label; unknown labels fall into the "その他" bucket.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,

    /// Prefecture / region label.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pref: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Legacy alias for `description` found in older data files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

impl LocationRecord {
    /// Create a record with numeric coordinates and no optional fields.
    pub fn new(
        name: impl Into<String>,
        lat: impl Into<RawCoordinate>,
        lng: impl Into<RawCoordinate>,
        category: impl Into<String>,
        pref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lat: Some(lat.into()),
            lng: Some(lng.into()),
            category: category.into(),
            pref: pref.into(),
            description: None,
            desc: None,
            season: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_legacy_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    #[must_use]
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Coerced coordinates, or `None` if either one is missing or malformed.
    #[must_use]
    pub fn position(&self) -> Option<LatLng> {
        let lat = self.lat.as_ref()?.to_degrees()?;
        let lng = self.lng.as_ref()?.to_degrees()?;
        Some(LatLng::new(lat, lng))
    }

    /// Description text, resolved as `description` then the legacy `desc`.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        non_empty(self.description.as_deref()).or_else(|| non_empty(self.desc.as_deref()))
    }

    /// Description for display, falling back to [`NO_DETAILS_PLACEHOLDER`].
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.description_text().unwrap_or(NO_DETAILS_PLACEHOLDER)
    }

    #[must_use]
    pub fn season_text(&self) -> Option<&str> {
        non_empty(self.season.as_deref())
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_coordinates() {
        let record = LocationRecord::new("A", 35.0, "139.5", "常設展示", "東京都");
        assert_eq!(record.position(), Some(LatLng::new(35.0, 139.5)));
    }

    #[test]
    fn test_parse_float_prefix_rules() {
        assert_eq!(parse_float_prefix("  35.5N"), Some(35.5));
        assert_eq!(parse_float_prefix("-12"), Some(-12.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("."), None);
    }

    #[test]
    fn test_malformed_coordinate_has_no_position() {
        let record = LocationRecord::new("A", "abc", 139.0, "イベント", "埼玉県");
        assert_eq!(record.position(), None);

        let mut missing = LocationRecord::new("B", 35.0, 139.0, "イベント", "埼玉県");
        missing.lng = None;
        assert_eq!(missing.position(), None);
    }

    #[test]
    fn test_infinity_is_rejected() {
        let record = LocationRecord::new("A", "Infinity", 139.0, "", "");
        assert_eq!(record.position(), None);
    }

    #[test]
    fn test_description_resolution_order() {
        let base = LocationRecord::new("A", 35.0, 139.0, "", "");
        assert_eq!(base.display_description(), NO_DETAILS_PLACEHOLDER);

        let legacy = base.clone().with_legacy_desc("old text");
        assert_eq!(legacy.description_text(), Some("old text"));

        let both = legacy.with_description("new text");
        assert_eq!(both.display_description(), "new text");

        let empty = base.with_description("");
        assert_eq!(empty.display_description(), NO_DETAILS_PLACEHOLDER);
    }

    #[test]
    fn test_deserialize_mixed_shapes() {
        let json = r#"{
            "name": "金魚の里",
            "lat": "35.0",
            "lng": 139.1,
            "category": "養殖・直売",
            "pref": "奈良県",
            "desc": "legacy",
            "season": null
        }"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.lat, Some(RawCoordinate::Text("35.0".to_string())));
        assert_eq!(record.position(), Some(LatLng::new(35.0, 139.1)));
        assert_eq!(record.display_description(), "legacy");
        assert_eq!(record.season_text(), None);
    }

    #[test]
    fn test_non_numeric_json_coordinates_deserialize_without_position() {
        let json = r#"{"name": "X", "lat": true, "lng": [139.0], "category": null, "pref": null}"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.lat, Some(RawCoordinate::Other(Value::Bool(true))));
        assert_eq!(record.position(), None);
        assert!(record.category.is_empty());
        assert!(record.pref.is_empty());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let record: LocationRecord = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(record.position(), None);
        assert!(record.category.is_empty());
        assert!(record.pref.is_empty());
    }
}
