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

use egui::{Color32, RichText};
use goldfish_core::{Category, CategoryFilter, FilterState};

use crate::map::to_color32;

/// A change requested through the filter bar this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Category(CategoryFilter),
    Query(String),
}

/// Category buttons plus the live search field
#[derive(Debug)]
pub struct FilterBar {
    buttons: Vec<CategoryFilter>,
    search_text: String,
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBar {
    pub fn new() -> Self {
        Self {
            buttons: CategoryFilter::buttons(),
            search_text: String::new(),
        }
    }

    /// Draw the bar. At most one event is produced per frame.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &FilterState) -> Option<FilterEvent> {
        let mut event = None;

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);
            for button in &self.buttons {
                let selected = *button == state.category;
                let mut text = RichText::new(button.label()).size(12.0);
                if let CategoryFilter::Only(label) = button {
                    if !selected {
                        text = text.color(to_color32(Category::bucket(label).color()));
                    }
                }
                // Re-clicking the selected button is a no-op
                if ui.selectable_label(selected, text).clicked() && !selected {
                    event = Some(FilterEvent::Category(button.clone()));
                }
            }
        });

        ui.add_space(6.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.search_text)
                .hint_text("名前・地域・説明で検索")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            event = Some(FilterEvent::Query(self.search_text.clone()));
        }

        event
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

/// Header line with the number of visible sites
pub fn result_count(ui: &mut egui::Ui, visible: usize, total: usize) {
    ui.label(
        RichText::new(format!("{visible} / {total} 件"))
            .color(Color32::from_rgb(120, 120, 120))
            .size(11.0)
            .monospace(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_start_with_all() {
        let bar = FilterBar::new();
        assert_eq!(bar.buttons.first(), Some(&CategoryFilter::All));
        assert_eq!(bar.buttons.len(), Category::ALL.len() + 1);
        assert!(bar.search_text().is_empty());
    }
}
