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
use goldfish_core::{SidebarContent, SidebarSurface};

/// Handle for an entry in the sidebar list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

/// Retained sidebar list drawn as a scrollable column of cards
#[derive(Debug, Default)]
pub struct EguiSidebar {
    entries: Vec<(EntryId, SidebarContent)>,
    active: Option<EntryId>,
    next_id: u64,
    // Scroll the active entry into view on the next frame
    scroll_to_active: bool,
}

impl EguiSidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, content)| content.title.as_str())
    }

    /// Draw the list; returns the entry clicked this frame
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<EntryId> {
        let mut clicked = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.push_id("location_list", |ui| {
                    if self.entries.is_empty() {
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new("該当する場所がありません")
                                .color(Color32::from_rgb(120, 120, 120))
                                .italics(),
                        );
                        return;
                    }

                    for (id, content) in &self.entries {
                        let is_active = self.active == Some(*id);

                        let frame = if is_active {
                            egui::Frame::group(ui.style())
                                .fill(Color32::from_rgb(224, 236, 255))
                                .stroke(egui::Stroke::new(1.5, Color32::from_rgb(30, 64, 175)))
                        } else {
                            egui::Frame::group(ui.style())
                        };

                        let response = frame
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(RichText::new(&content.title).size(14.0).strong());
                                ui.horizontal(|ui| {
                                    super::badge(ui, &content.badge);
                                    ui.label(
                                        RichText::new(&content.region)
                                            .color(Color32::from_rgb(110, 110, 110))
                                            .size(11.0),
                                    );
                                });
                                ui.label(
                                    RichText::new(&content.description)
                                        .color(Color32::from_rgb(90, 90, 90))
                                        .size(11.0),
                                );
                            })
                            .response
                            .interact(egui::Sense::click());

                        if is_active && self.scroll_to_active {
                            response.scroll_to_me(Some(egui::Align::Center));
                        }

                        if response.clicked() {
                            clicked = Some(*id);
                        }

                        ui.add_space(4.0);
                    }
                });
            });

        self.scroll_to_active = false;
        clicked
    }
}

impl SidebarSurface for EguiSidebar {
    type Entry = EntryId;

    fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
    }

    fn append(&mut self, content: SidebarContent) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, content));
        id
    }

    fn set_active(&mut self, entry: Option<EntryId>) {
        self.active = entry.filter(|id| self.entries.iter().any(|(e, _)| e == id));
        self.scroll_to_active = self.active.is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldfish_core::LocationRecord;

    fn content(name: &str) -> SidebarContent {
        SidebarContent::from_record(&LocationRecord::new(name, 35.0, 139.0, "イベント", "東京都"))
    }

    #[test]
    fn test_single_active_entry() {
        let mut sidebar = EguiSidebar::new();
        let a = sidebar.append(content("A"));
        let b = sidebar.append(content("B"));

        sidebar.set_active(Some(a));
        sidebar.set_active(Some(b));
        assert_eq!(sidebar.active(), Some(b));

        sidebar.set_active(None);
        assert_eq!(sidebar.active(), None);
    }

    #[test]
    fn test_clear_drops_entries_and_selection() {
        let mut sidebar = EguiSidebar::new();
        let a = sidebar.append(content("A"));
        sidebar.set_active(Some(a));
        sidebar.clear();
        assert!(sidebar.is_empty());
        assert_eq!(sidebar.active(), None);

        // Handles are never reused after a clear
        let b = sidebar.append(content("B"));
        assert_ne!(a, b);
        sidebar.set_active(Some(a));
        assert_eq!(sidebar.active(), None);
        assert_eq!(sidebar.titles().collect::<Vec<_>>(), vec!["B"]);
    }
}
