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

//! Application state and UI event handling.
//!
//! [`MapController`] owns the full data set, the filter state, the renderer and
//! both surfaces. UI events come in through its methods; each one updates the
//! filter state and re-renders the filtered subset synchronously.

use log::{debug, info};

use crate::category::CategoryFilter;
use crate::filter::FilterState;
use crate::record::LocationRecord;
use crate::render::{FocusOptions, Renderer};
use crate::surface::{MapSurface, SidebarSurface};

/// Single owner of the viewer's mutable state.
#[derive(Debug)]
pub struct MapController<M: MapSurface, S: SidebarSurface> {
    records: Vec<LocationRecord>,
    filter: FilterState,
    renderer: Renderer<M::Pin, S::Entry>,
    map: M,
    sidebar: S,
}

impl<M: MapSurface, S: SidebarSurface> MapController<M, S> {
    /// Create the controller and render the full data set.
    ///
    /// An absent data set is treated as empty.
    pub fn new(records: Option<Vec<LocationRecord>>, map: M, sidebar: S, focus: FocusOptions) -> Self {
        let records = records.unwrap_or_default();
        info!("Loaded {} location records", records.len());

        let mut controller = Self {
            records,
            filter: FilterState::default(),
            renderer: Renderer::new(focus),
            map,
            sidebar,
        };
        controller.refresh();
        controller
    }

    /// Handle a click on a filter bar button.
    pub fn select_category(&mut self, category: CategoryFilter) {
        debug!("Category filter: {}", category.label());
        self.filter.category = category;
        self.refresh();
    }

    /// Handle a change of the search box contents.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        debug!("Search query: {:?}", self.filter.query);
        self.refresh();
    }

    /// Handle a click on a sidebar entry. Returns `false` for stale entries.
    pub fn entry_clicked(&mut self, entry: S::Entry) -> bool {
        self.renderer.activate(&mut self.map, &mut self.sidebar, entry)
    }

    /// Handle a click on a pin by opening its popup.
    pub fn pin_clicked(&mut self, pin: M::Pin) -> bool {
        if self.renderer.binding_for_pin(pin).is_none() {
            return false;
        }
        self.map.open_popup(pin);
        true
    }

    /// Recompute the filtered subset and re-render it.
    pub fn refresh(&mut self) {
        let visible = self.filter.apply(&self.records);
        self.renderer
            .render(&mut self.map, &mut self.sidebar, Some(visible.iter().copied()));
    }

    #[must_use]
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Number of sites currently shown on the map and in the list.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.renderer.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer<M::Pin, S::Entry> {
        &self.renderer
    }

    #[must_use]
    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    #[must_use]
    pub fn sidebar(&self) -> &S {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut S {
        &mut self.sidebar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::surface::recording::{RecordingMap, RecordingSidebar};

    fn controller(records: Option<Vec<LocationRecord>>) -> MapController<RecordingMap, RecordingSidebar> {
        MapController::new(
            records,
            RecordingMap::default(),
            RecordingSidebar::default(),
            FocusOptions::default(),
        )
    }

    fn data() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("Goldfish Hall", 35.0, 139.0, "常設展示", "東京都"),
            LocationRecord::new("Fish Fair", 34.7, 135.8, "イベント", "奈良県"),
            LocationRecord::new("Broken", "n/a", "n/a", "イベント", "奈良県"),
            LocationRecord::new("Odd Pond", 36.0, 138.0, "謎カテゴリ", "長野県"),
        ]
    }

    fn titles(c: &MapController<RecordingMap, RecordingSidebar>) -> Vec<String> {
        c.sidebar().entries.iter().map(|(_, e)| e.title.clone()).collect()
    }

    #[test]
    fn test_initial_render_shows_all_valid_records() {
        let c = controller(Some(data()));
        assert_eq!(c.visible_count(), 3);
        assert_eq!(c.map().pins.len(), 3);
        assert_eq!(c.filter_state(), &FilterState::default());
    }

    #[test]
    fn test_absent_data_starts_empty() {
        let c = controller(None);
        assert!(c.records().is_empty());
        assert_eq!(c.visible_count(), 0);
        assert!(c.map().pins.is_empty());
    }

    #[test]
    fn test_category_then_search_narrow_the_view() {
        let mut c = controller(Some(data()));

        c.select_category(Category::Event.into());
        assert_eq!(titles(&c), vec!["Fish Fair"]);

        c.set_search_query("hall");
        assert!(titles(&c).is_empty());
        assert!(c.map().pins.is_empty());

        c.select_category(CategoryFilter::All);
        assert_eq!(titles(&c), vec!["Goldfish Hall"]);

        c.set_search_query("");
        assert_eq!(c.visible_count(), 3);
    }

    #[test]
    fn test_other_bucket_through_controller() {
        let mut c = controller(Some(data()));
        c.select_category(Category::Other.into());
        assert_eq!(titles(&c), vec!["Odd Pond"]);
    }

    #[test]
    fn test_entry_click_activates_and_stale_entry_is_ignored() {
        let mut c = controller(Some(data()));
        let stale = c.sidebar().entries[0].0;

        c.set_search_query("fish");
        let fresh = c.sidebar().entries[1].0;
        assert!(!c.entry_clicked(stale));
        assert!(c.entry_clicked(fresh));
        assert_eq!(c.sidebar().active, Some(fresh));
        assert_eq!(c.map().open_popup, c.renderer().pin_for(fresh));
        assert_eq!(c.map().flights.len(), 1);
    }

    #[test]
    fn test_pin_click_opens_popup() {
        let mut c = controller(Some(data()));
        let pin = c.map().pins[2].id;
        assert!(c.pin_clicked(pin));
        assert_eq!(c.map().open_popup, Some(pin));
        assert!(!c.pin_clicked(999));
    }

    #[test]
    fn test_repeated_events_are_stable() {
        let mut c = controller(Some(data()));
        c.set_search_query("fish");
        let first = titles(&c);
        c.set_search_query("fish");
        assert_eq!(titles(&c), first);
        assert_eq!(c.map().pins.len(), first.len());
    }
}
