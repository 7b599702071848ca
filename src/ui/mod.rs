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

//! UI components for the goldfish map.

pub mod filter_bar;
pub mod fonts;
pub mod sidebar;

pub use filter_bar::{FilterBar, FilterEvent};
pub use sidebar::{EguiSidebar, EntryId};

use goldfish_core::Badge;

use crate::map::to_color32;

/// Category badge chip
pub fn badge(ui: &mut egui::Ui, badge: &Badge) {
    egui::Frame::new()
        .fill(to_color32(badge.color))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&badge.label)
                    .color(egui::Color32::WHITE)
                    .size(10.0)
                    .strong(),
            );
        });
}
