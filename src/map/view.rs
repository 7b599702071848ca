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

//! egui/walkers implementation of the map surface.
//!
//! egui is immediate mode, so [`EguiMap`] retains what the renderer asked for
//! (pins, popups, the open popup, a pending flight) and draws it every frame.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use egui::{Align2, Color32, FontId, Pos2, Stroke};
use goldfish_core::{IconDescriptor, LatLng, MapSurface, PopupContent};
use log::{debug, warn};
use walkers::{HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use super::flight::Flight;
use super::{from_position, to_color32, to_position};

/// Handle for a pin on an [`EguiMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinId(u64);

/// What a click on the map hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapClick {
    Pin(PinId),
    Background,
}

#[derive(Debug, Clone)]
struct PinSlot {
    id: PinId,
    at: LatLng,
    icon: IconDescriptor,
    popup: Option<PopupContent>,
}

/// Retained map state drawn through walkers.
pub struct EguiMap {
    memory: MapMemory,
    home: LatLng,
    pins: Vec<PinSlot>,
    next_id: u64,
    open_popup: Option<PinId>,
    flight: Option<Flight>,
}

impl std::fmt::Debug for EguiMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EguiMap")
            .field("home", &self.home)
            .field("pins", &self.pins.len())
            .field("open_popup", &self.open_popup)
            .field("flight", &self.flight)
            .finish_non_exhaustive()
    }
}

impl EguiMap {
    pub fn new(home: LatLng, zoom: f64) -> Self {
        let mut memory = MapMemory::default();
        if memory.set_zoom(zoom).is_err() {
            warn!("Initial zoom {} out of range, keeping default", zoom);
        }
        Self {
            memory,
            home,
            pins: Vec::new(),
            next_id: 0,
            open_popup: None,
            flight: None,
        }
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn active_popup(&self) -> Option<PinId> {
        self.open_popup
    }

    pub fn popup_content(&self, pin: PinId) -> Option<&PopupContent> {
        self.slot(pin).and_then(|slot| slot.popup.as_ref())
    }

    pub fn close_popup(&mut self) {
        self.open_popup = None;
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Current view center, following the user's panning.
    pub fn center(&self) -> LatLng {
        self.memory.detached().map_or(self.home, from_position)
    }

    pub fn zoom(&self) -> f64 {
        self.memory.zoom()
    }

    fn slot(&self, pin: PinId) -> Option<&PinSlot> {
        self.pins.iter().find(|slot| slot.id == pin)
    }

    fn advance_flight(&mut self, now: f64) -> bool {
        let Some(flight) = self.flight.as_mut() else {
            return false;
        };

        let frame = flight.step(now);
        self.memory.center_at(to_position(frame.center));
        if self.memory.set_zoom(frame.zoom).is_err() {
            debug!("Flight zoom {} rejected by map", frame.zoom);
        }
        if frame.finished {
            self.flight = None;
        }
        true
    }

    /// Draw the map with its pins and the open popup.
    pub fn show(&mut self, ui: &mut egui::Ui, tiles: &mut HttpTiles) -> Option<MapClick> {
        let now = ui.input(|i| i.time);
        if self.advance_flight(now) {
            ui.ctx().request_repaint();
        }

        let hits = Arc::new(Mutex::new(PinHits::default()));
        let plugin = PinsPlugin {
            pins: self
                .pins
                .iter()
                .map(|slot| (slot.id, to_position(slot.at), slot.icon))
                .collect(),
            open_popup: self.open_popup,
            hits: Arc::clone(&hits),
        };

        let map_rect = ui.available_rect_before_wrap();
        let response = ui.add(
            Map::new(Some(tiles), &mut self.memory, to_position(self.home)).with_plugin(plugin),
        );

        // Dragging cancels an animation in progress
        if response.dragged() {
            self.flight = None;
        }

        let hits = PinHits::take(&hits);

        let click = match hits.clicked {
            Some(pin) => Some(MapClick::Pin(pin)),
            None if response.clicked() => {
                self.close_popup();
                Some(MapClick::Background)
            }
            None => None,
        };

        if let (Some(pin), Some(anchor)) = (self.open_popup, hits.popup_anchor) {
            if map_rect.contains(anchor) {
                self.draw_popup(ui.ctx(), pin, anchor);
            }
        }

        click
    }

    fn draw_popup(&mut self, ctx: &egui::Context, pin: PinId, anchor: Pos2) {
        let Some(content) = self.popup_content(pin).cloned() else {
            return;
        };

        let mut close = false;
        egui::Area::new(egui::Id::new("site_popup"))
            .fixed_pos(anchor)
            .pivot(Align2::CENTER_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(Color32::WHITE)
                    .corner_radius(8.0)
                    .show(ui, |ui| {
                        ui.set_max_width(260.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&content.title)
                                    .color(Color32::from_rgb(30, 41, 59))
                                    .size(15.0)
                                    .strong(),
                            );
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                if ui.small_button("✕").clicked() {
                                    close = true;
                                }
                            });
                        });
                        ui.horizontal(|ui| {
                            crate::ui::badge(ui, &content.badge);
                            ui.label(
                                egui::RichText::new(&content.region)
                                    .color(Color32::from_rgb(100, 116, 139))
                                    .size(11.0),
                            );
                        });
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(&content.description)
                                .color(Color32::from_rgb(51, 65, 85))
                                .size(12.0),
                        );
                        if let Some(season) = &content.season {
                            ui.add_space(2.0);
                            ui.label(
                                egui::RichText::new(format!("📅 {season}"))
                                    .color(Color32::from_rgb(180, 83, 9))
                                    .size(11.0),
                            );
                        }
                    });
            });

        if close {
            self.close_popup();
        }
    }
}

impl MapSurface for EguiMap {
    type Pin = PinId;

    fn add_pin(&mut self, at: LatLng, icon: &IconDescriptor) -> PinId {
        let id = PinId(self.next_id);
        self.next_id += 1;
        self.pins.push(PinSlot {
            id,
            at,
            icon: *icon,
            popup: None,
        });
        id
    }

    fn remove_pin(&mut self, pin: PinId) {
        self.pins.retain(|slot| slot.id != pin);
        if self.open_popup == Some(pin) {
            self.open_popup = None;
        }
    }

    fn bind_popup(&mut self, pin: PinId, content: PopupContent) {
        if let Some(slot) = self.pins.iter_mut().find(|slot| slot.id == pin) {
            slot.popup = Some(content);
        }
    }

    fn open_popup(&mut self, pin: PinId) {
        if self.slot(pin).is_some_and(|slot| slot.popup.is_some()) {
            self.open_popup = Some(pin);
        }
    }

    fn fly_to(&mut self, at: LatLng, zoom: f64, duration: Duration) {
        self.flight = Some(Flight::new(self.center(), self.zoom(), at, zoom, duration));
    }
}

/// Results reported back from the plugin for the current frame.
#[derive(Debug, Default)]
struct PinHits {
    clicked: Option<PinId>,
    popup_anchor: Option<Pos2>,
}

impl PinHits {
    /// Drain this frame's results. A panic elsewhere in the frame must not
    /// wedge pin interaction, so a poisoned lock is still read.
    fn take(hits: &Mutex<Self>) -> Self {
        std::mem::take(&mut *hits.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Walkers plugin that draws the pins and hit-tests clicks on them.
struct PinsPlugin {
    pins: Vec<(PinId, Position, IconDescriptor)>,
    open_popup: Option<PinId>,
    hits: Arc<Mutex<PinHits>>,
}

impl Plugin for PinsPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter().with_clip_rect(response.rect);
        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        let mut hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);

        for (id, position, icon) in &self.pins {
            let tip = projector.project(*position).to_pos2();
            draw_pin(&painter, tip, icon);

            let (dx, dy) = icon.head_center_offset();
            let head = tip + egui::vec2(dx, dy);

            // Later pins are drawn on top, so the last hit wins
            if let Some(click) = click_pos {
                if click.distance(head) <= icon.hit_radius() {
                    hits.clicked = Some(*id);
                }
            }

            if self.open_popup == Some(*id) {
                hits.popup_anchor = Some(tip + egui::vec2(icon.popup_anchor.0, icon.popup_anchor.1));
            }
        }
    }
}

/// Teardrop pin with its tip on `tip` and the fish glyph in the head.
fn draw_pin(painter: &egui::Painter, tip: Pos2, icon: &IconDescriptor) {
    let color = to_color32(icon.color);
    let radius = icon.head_diameter() / 2.0;
    let (dx, dy) = icon.head_center_offset();
    let head = tip + egui::vec2(dx, dy);

    // Shadow
    painter.circle_filled(head + egui::vec2(2.0, 2.0), radius, Color32::from_black_alpha(70));

    let shoulder = radius * 0.7;
    painter.add(egui::Shape::convex_polygon(
        vec![
            head + egui::vec2(-shoulder, shoulder),
            tip,
            head + egui::vec2(shoulder, shoulder),
        ],
        color,
        Stroke::NONE,
    ));
    painter.circle_filled(head, radius, color);
    painter.circle_stroke(head, radius, Stroke::new(2.0, Color32::WHITE));

    painter.text(
        head,
        Align2::CENTER_CENTER,
        icon.glyph,
        FontId::proportional(14.0),
        Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldfish_core::{icon_for, LocationRecord};

    fn map_with_pin() -> (EguiMap, PinId) {
        let mut map = EguiMap::new(LatLng::new(36.2048, 138.2529), 5.0);
        let record = LocationRecord::new("A", 35.0, 139.0, "イベント", "東京都");
        let pin = map.add_pin(LatLng::new(35.0, 139.0), &icon_for(&record.category));
        map.bind_popup(pin, PopupContent::from_record(&record));
        (map, pin)
    }

    #[test]
    fn test_open_and_remove_popup() {
        let (mut map, pin) = map_with_pin();
        map.open_popup(pin);
        assert_eq!(map.active_popup(), Some(pin));
        assert_eq!(map.popup_content(pin).unwrap().title, "A");

        map.remove_pin(pin);
        assert_eq!(map.pin_count(), 0);
        assert_eq!(map.active_popup(), None);
    }

    #[test]
    fn test_open_popup_requires_bound_content() {
        let mut map = EguiMap::new(LatLng::new(36.0, 138.0), 5.0);
        let pin = map.add_pin(LatLng::new(35.0, 139.0), &icon_for("品評会"));
        map.open_popup(pin);
        assert_eq!(map.active_popup(), None);
    }

    #[test]
    fn test_fly_to_starts_from_current_view() {
        let (mut map, _) = map_with_pin();
        map.fly_to(LatLng::new(35.0, 139.0), 14.0, Duration::from_millis(1500));
        assert!(map.is_flying());

        map.advance_flight(10.0);
        assert_eq!(map.center(), LatLng::new(36.2048, 138.2529));

        map.advance_flight(12.0);
        assert!(!map.is_flying());
        assert!((map.zoom() - 14.0).abs() < 1e-9);
        let center = map.center();
        assert!((center.lat - 35.0).abs() < 1e-9);
        assert!((center.lng - 139.0).abs() < 1e-9);
    }

    #[test]
    fn test_pin_hits_survive_poisoned_lock() {
        let hits = Arc::new(Mutex::new(PinHits::default()));
        let writer = Arc::clone(&hits);
        let _ = std::thread::spawn(move || {
            let mut guard = writer.lock().unwrap();
            guard.clicked = Some(PinId(7));
            panic!("paint failed");
        })
        .join();
        assert!(hits.is_poisoned());

        assert_eq!(PinHits::take(&hits).clicked, Some(PinId(7)));
        assert_eq!(PinHits::take(&hits).clicked, None);
    }
}
