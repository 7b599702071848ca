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

//! Pin icon descriptors keyed by category.

use crate::category::{Category, Rgb};

/// Pin width and height in points.
pub const PIN_SIZE: (f32, f32) = (30.0, 42.0);
/// Offset from the icon's top-left corner to the point that sits on the coordinate.
pub const PIN_ANCHOR: (f32, f32) = (15.0, 42.0);
/// Offset from the anchor to where a popup's tail attaches.
pub const POPUP_ANCHOR: (f32, f32) = (0.0, -40.0);
/// Glyph drawn inside the pin head.
pub const FISH_GLYPH: char = '🐟';

/// Everything a map widget needs to draw a category pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconDescriptor {
    pub color: Rgb,
    pub size: (f32, f32),
    /// The pin's bottom tip, relative to the icon's top-left corner.
    pub anchor: (f32, f32),
    pub popup_anchor: (f32, f32),
    pub glyph: char,
}

impl IconDescriptor {
    /// Diameter of the round pin head.
    #[must_use]
    pub fn head_diameter(&self) -> f32 {
        self.size.0
    }

    /// Offset from the anchor (tip) to the center of the pin head.
    #[must_use]
    pub fn head_center_offset(&self) -> (f32, f32) {
        let radius = self.head_diameter() / 2.0;
        (radius - self.anchor.0, radius - self.anchor.1)
    }

    /// Radius around the head center that counts as a click on the pin.
    #[must_use]
    pub fn hit_radius(&self) -> f32 {
        self.head_diameter() / 2.0 + 2.0
    }
}

/// Icon for a category label. Unknown labels get the "その他" color.
#[must_use]
pub fn icon_for(category: &str) -> IconDescriptor {
    IconDescriptor {
        color: Category::bucket(category).color(),
        size: PIN_SIZE,
        anchor: PIN_ANCHOR,
        popup_anchor: POPUP_ANCHOR,
        glyph: FISH_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_colors() {
        assert_eq!(icon_for("イベント").color, Category::Event.color());
        assert_eq!(icon_for("謎カテゴリ").color, Category::Other.color());
        assert_eq!(icon_for("").color, Category::Other.color());
    }

    #[test]
    fn test_anchor_is_bottom_tip() {
        let icon = icon_for("常設展示");
        assert!((icon.anchor.0 - icon.size.0 / 2.0).abs() < f32::EPSILON);
        assert!((icon.anchor.1 - icon.size.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_head_sits_above_tip() {
        let icon = icon_for("品評会");
        let (dx, dy) = icon.head_center_offset();
        assert!(dx.abs() < f32::EPSILON);
        assert!((dy - -27.0).abs() < f32::EPSILON);
        // Popup opens above the head
        assert!(icon.popup_anchor.1 < dy);
    }
}
