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

//! Renderer: keeps the map pins and the sidebar list in lockstep.
//!
//! Every [`Renderer::render`] pass tears down the previous pass completely and
//! rebuilds pins and list entries from the given records. The registry of
//! [`MarkerBinding`]s is owned here and nowhere else.

use std::time::Duration;

use log::debug;

use crate::icon::icon_for;
use crate::record::{LatLng, LocationRecord};
use crate::surface::{MapSurface, PopupContent, SidebarContent, SidebarSurface};

/// Zoom level used when focusing a site from the list.
pub const FOCUS_ZOOM: f64 = 14.0;
/// Duration of the fly-to animation when focusing a site.
pub const FOCUS_DURATION: Duration = Duration::from_millis(1500);

/// How the map moves when a list entry is activated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusOptions {
    pub zoom: f64,
    pub duration: Duration,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            zoom: FOCUS_ZOOM,
            duration: FOCUS_DURATION,
        }
    }
}

/// One rendered site: its pin, its list entry and the record behind both.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBinding<P, E> {
    pub pin: P,
    pub entry: E,
    pub record: LocationRecord,
    pub position: LatLng,
}

/// Owner of the marker registry.
#[derive(Debug, Clone)]
pub struct Renderer<P, E> {
    bindings: Vec<MarkerBinding<P, E>>,
    focus: FocusOptions,
}

impl<P: Copy + Eq, E: Copy + Eq> Default for Renderer<P, E> {
    fn default() -> Self {
        Self::new(FocusOptions::default())
    }
}

impl<P: Copy + Eq, E: Copy + Eq> Renderer<P, E> {
    #[must_use]
    pub fn new(focus: FocusOptions) -> Self {
        Self {
            bindings: Vec::new(),
            focus,
        }
    }

    #[must_use]
    pub fn focus(&self) -> FocusOptions {
        self.focus
    }

    /// Replace the current pins and list entries with ones built from `records`.
    ///
    /// Teardown always happens, so `None` or an empty set leaves an empty map
    /// and list. Records whose coordinates do not coerce to numbers are skipped.
    pub fn render<'a, M, S, I>(&mut self, map: &mut M, sidebar: &mut S, records: Option<I>)
    where
        M: MapSurface<Pin = P>,
        S: SidebarSurface<Entry = E>,
        I: IntoIterator<Item = &'a LocationRecord>,
    {
        self.clear(map, sidebar);

        let Some(records) = records else {
            return;
        };

        let mut skipped = 0usize;
        for record in records {
            let Some(position) = record.position() else {
                debug!("Skipping '{}': coordinates are not numeric", record.name);
                skipped += 1;
                continue;
            };

            let icon = icon_for(&record.category);
            let pin = map.add_pin(position, &icon);
            map.bind_popup(pin, PopupContent::from_record(record));

            let entry = sidebar.append(SidebarContent::from_record(record));

            self.bindings.push(MarkerBinding {
                pin,
                entry,
                record: record.clone(),
                position,
            });
        }

        debug!("Rendered {} sites ({} skipped)", self.bindings.len(), skipped);
    }

    /// Remove every pin of the previous pass and empty the sidebar.
    pub fn clear<M, S>(&mut self, map: &mut M, sidebar: &mut S)
    where
        M: MapSurface<Pin = P>,
        S: SidebarSurface<Entry = E>,
    {
        for binding in self.bindings.drain(..) {
            map.remove_pin(binding.pin);
        }
        sidebar.set_active(None);
        sidebar.clear();
    }

    /// Handle a click on a sidebar entry.
    ///
    /// Makes `entry` the only active entry, flies the map to its site and opens
    /// the site's popup. Returns `false` for entries not rendered by this pass.
    pub fn activate<M, S>(&self, map: &mut M, sidebar: &mut S, entry: E) -> bool
    where
        M: MapSurface<Pin = P>,
        S: SidebarSurface<Entry = E>,
    {
        let Some(binding) = self.binding_for_entry(entry) else {
            return false;
        };

        sidebar.set_active(Some(entry));
        map.fly_to(binding.position, self.focus.zoom, self.focus.duration);
        map.open_popup(binding.pin);
        true
    }

    #[must_use]
    pub fn binding_for_entry(&self, entry: E) -> Option<&MarkerBinding<P, E>> {
        self.bindings.iter().find(|b| b.entry == entry)
    }

    #[must_use]
    pub fn binding_for_pin(&self, pin: P) -> Option<&MarkerBinding<P, E>> {
        self.bindings.iter().find(|b| b.pin == pin)
    }

    #[must_use]
    pub fn pin_for(&self, entry: E) -> Option<P> {
        self.binding_for_entry(entry).map(|b| b.pin)
    }

    #[must_use]
    pub fn bindings(&self) -> &[MarkerBinding<P, E>] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
