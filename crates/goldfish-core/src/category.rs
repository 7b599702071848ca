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

//! Category labels, their pin colors and the filter bucket logic.

use std::fmt;

use crate::record::LocationRecord;

/// Filter bar label for "no category filter".
pub const ALL_LABEL: &str = "すべて";

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The known site categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Permanent exhibit (常設展示)
    Permanent,
    /// Event (イベント)
    Event,
    /// Farm and direct sales (養殖・直売)
    FarmShop,
    /// Competitive show (品評会)
    Competition,
    /// Everything else (その他)
    Other,
}

impl Category {
    /// All known categories in filter bar order.
    pub const ALL: [Category; 5] = [
        Category::Permanent,
        Category::Event,
        Category::FarmShop,
        Category::Competition,
        Category::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Permanent => "常設展示",
            Category::Event => "イベント",
            Category::FarmShop => "養殖・直売",
            Category::Competition => "品評会",
            Category::Other => "その他",
        }
    }

    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            Category::Permanent => Rgb::from_hex(0x1e40af),
            Category::Event => Rgb::from_hex(0xbe123c),
            Category::FarmShop => Rgb::from_hex(0x166534),
            Category::Competition => Rgb::from_hex(0xb45309),
            Category::Other => Rgb::from_hex(0x4b5563),
        }
    }

    /// Exact lookup of a known label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// The visual/filter bucket a label belongs to; unknown labels land in `Other`.
    #[must_use]
    pub fn bucket(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Category::Other)
    }

    #[must_use]
    pub fn is_known(label: &str) -> bool {
        Self::from_label(label).is_some()
    }
}

/// The category selection of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Keep records whose category label equals this one.
    Only(String),
}

impl CategoryFilter {
    /// Filter bar buttons in display order, "all" first.
    #[must_use]
    pub fn buttons() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::from))
            .collect()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(label) => label,
        }
    }

    /// Category predicate of the filter engine.
    ///
    /// Selecting "その他" also keeps every record whose label is not a known
    /// category.
    #[must_use]
    pub fn matches(&self, record: &LocationRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => {
                record.category == *label
                    || (label == Category::Other.label() && !Category::is_known(&record.category))
            }
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category.label().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str) -> LocationRecord {
        LocationRecord::new("site", 35.0, 139.0, category, "東京都")
    }

    #[test]
    fn test_bucket_falls_back_to_other() {
        assert_eq!(Category::bucket("品評会"), Category::Competition);
        assert_eq!(Category::bucket("謎カテゴリ"), Category::Other);
        assert_eq!(Category::bucket(""), Category::Other);
    }

    #[test]
    fn test_color_hex_formatting() {
        assert_eq!(Category::Permanent.color().to_string(), "#1e40af");
        assert_eq!(Category::Other.color(), Rgb::new(0x4b, 0x55, 0x63));
    }

    #[test]
    fn test_other_filter_catches_unknown_labels() {
        let other = CategoryFilter::from(Category::Other);
        assert!(other.matches(&record("その他")));
        assert!(other.matches(&record("謎カテゴリ")));
        assert!(!other.matches(&record("常設展示")));
    }

    #[test]
    fn test_specific_filter_is_exact() {
        let event = CategoryFilter::from(Category::Event);
        assert!(event.matches(&record("イベント")));
        assert!(!event.matches(&record("謎カテゴリ")));
        assert!(CategoryFilter::All.matches(&record("謎カテゴリ")));
    }

    #[test]
    fn test_buttons_order() {
        let buttons = CategoryFilter::buttons();
        assert_eq!(buttons.len(), 6);
        assert_eq!(buttons[0], CategoryFilter::All);
        assert_eq!(buttons[5].label(), "その他");
    }
}
