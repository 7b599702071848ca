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

//! Map rendering: tile source, fly-to animation and the egui map surface.

pub mod flight;
pub mod tiles;
pub mod view;

pub use flight::Flight;
pub use tiles::TemplateTileSource;
pub use view::{EguiMap, MapClick, PinId};

use goldfish_core::{LatLng, Rgb};
use walkers::Position;

pub(crate) fn to_position(at: LatLng) -> Position {
    walkers::lat_lon(at.lat, at.lng)
}

pub(crate) fn from_position(position: Position) -> LatLng {
    LatLng::new(position.y(), position.x())
}

pub(crate) fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
