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

//! Collaborator interfaces for the map widget and the sidebar list.
//!
//! The renderer only talks to these traits, so the filtering and rendering
//! logic can run against an egui front end or against the recording fakes used
//! in tests.

use std::fmt::Debug;
use std::time::Duration;

use crate::category::{Category, Rgb};
use crate::icon::IconDescriptor;
use crate::record::{LatLng, LocationRecord};

/// Category badge shown next to a site's region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// The record's category label, as written in the data.
    pub label: String,
    pub color: Rgb,
}

impl Badge {
    #[must_use]
    pub fn for_category(label: &str) -> Self {
        Self {
            label: label.to_string(),
            color: Category::bucket(label).color(),
        }
    }
}

/// Content of a pin's popup card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub title: String,
    pub badge: Badge,
    pub region: String,
    pub description: String,
    /// Only present when the record has a season; no empty line otherwise.
    pub season: Option<String>,
}

impl PopupContent {
    #[must_use]
    pub fn from_record(record: &LocationRecord) -> Self {
        Self {
            title: record.name.clone(),
            badge: Badge::for_category(&record.category),
            region: record.pref.clone(),
            description: record.display_description().to_string(),
            season: record.season_text().map(str::to_string),
        }
    }
}

/// Content of one sidebar list entry. Season is popup-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarContent {
    pub title: String,
    pub badge: Badge,
    pub region: String,
    pub description: String,
}

impl SidebarContent {
    #[must_use]
    pub fn from_record(record: &LocationRecord) -> Self {
        Self {
            title: record.name.clone(),
            badge: Badge::for_category(&record.category),
            region: record.pref.clone(),
            description: record.display_description().to_string(),
        }
    }
}

/// Imperative operations the core needs from a map widget.
pub trait MapSurface {
    /// Handle identifying a pin placed on this map.
    type Pin: Copy + Eq + Debug;

    /// Place a pin whose anchor sits on `at`.
    fn add_pin(&mut self, at: LatLng, icon: &IconDescriptor) -> Self::Pin;

    /// Remove a pin, along with its popup.
    fn remove_pin(&mut self, pin: Self::Pin);

    fn bind_popup(&mut self, pin: Self::Pin, content: PopupContent);

    /// Open the popup bound to `pin`, closing any other open popup.
    fn open_popup(&mut self, pin: Self::Pin);

    /// Animate the view to `at` at `zoom` over `duration`.
    fn fly_to(&mut self, at: LatLng, zoom: f64, duration: Duration);
}

/// Imperative operations the core needs from the sidebar list.
pub trait SidebarSurface {
    /// Handle identifying a list entry. Clicks are reported with this handle.
    type Entry: Copy + Eq + Debug;

    /// Remove every entry.
    fn clear(&mut self);

    /// Append an entry at the end of the list.
    fn append(&mut self, content: SidebarContent) -> Self::Entry;

    /// Mark `entry` as the single active entry; `None` deactivates all.
    fn set_active(&mut self, entry: Option<Self::Entry>);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_omits_missing_season() {
        let record = LocationRecord::new("A", 35.0, 139.0, "謎カテゴリ", "岐阜県");
        let popup = PopupContent::from_record(&record);
        assert_eq!(popup.season, None);
        assert_eq!(popup.badge.label, "謎カテゴリ");
        assert_eq!(popup.badge.color, Category::Other.color());
        assert_eq!(popup.region, "岐阜県");
    }

    #[test]
    fn test_popup_and_sidebar_share_description() {
        let record = LocationRecord::new("A", 35.0, 139.0, "品評会", "愛知県")
            .with_legacy_desc("old")
            .with_season("秋");
        let popup = PopupContent::from_record(&record);
        let entry = SidebarContent::from_record(&record);
        assert_eq!(popup.description, "old");
        assert_eq!(entry.description, "old");
        assert_eq!(popup.season.as_deref(), Some("秋"));
    }
}
