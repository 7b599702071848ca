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

//! Core logic for the goldfish site map.
//!
//! This crate holds everything that does not depend on a particular UI toolkit:
//!
//! - **Data model**: [`LocationRecord`] with coordinate coercion and description
//!   fallback
//! - **Categories and icons**: the five known categories, their colors and the
//!   pin descriptor built by [`icon_for`]
//! - **Filter engine**: [`filter`] combines a [`CategoryFilter`] with a
//!   case-insensitive text query
//! - **Renderer**: [`Renderer`] rebuilds map pins and sidebar entries through the
//!   [`MapSurface`] and [`SidebarSurface`] traits
//! - **Controller**: [`MapController`] owns the state and turns UI events into
//!   re-renders
//!
//! # Example
//!
//! ```
//! use goldfish_core::{filter, CategoryFilter, Category, LocationRecord};
//!
//! let records = vec![
//!     LocationRecord::new("Goldfish Hall", 35.68, 139.76, "常設展示", "東京都"),
//!     LocationRecord::new("Pond", 34.64, 135.78, "養殖・直売", "奈良県"),
//! ];
//!
//! let shown = filter(&records, &CategoryFilter::from(Category::Permanent), "hall");
//! assert_eq!(shown.len(), 1);
//! ```

pub mod category;
pub mod controller;
pub mod dataset;
pub mod filter;
pub mod icon;
pub mod record;
pub mod render;
pub mod surface;

pub use category::{Category, CategoryFilter, Rgb, ALL_LABEL};
pub use controller::MapController;
pub use dataset::DatasetError;
pub use filter::{filter, FilterState};
pub use icon::{icon_for, IconDescriptor};
pub use record::{LatLng, LocationRecord, RawCoordinate, NO_DETAILS_PLACEHOLDER};
pub use render::{FocusOptions, MarkerBinding, Renderer, FOCUS_DURATION, FOCUS_ZOOM};
pub use surface::{Badge, MapSurface, PopupContent, SidebarContent, SidebarSurface};
