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

use std::path::PathBuf;

use goldfish_core::{LocationRecord, MapController};
use log::info;
use walkers::{HttpOptions, HttpTiles};

use crate::config::AppConfig;
use crate::map::{EguiMap, MapClick, TemplateTileSource};
use crate::ui::{self, EguiSidebar, FilterBar, FilterEvent};

pub struct GoldfishMapApp {
    controller: MapController<EguiMap, EguiSidebar>,
    tiles: HttpTiles,
    filter_bar: FilterBar,
    sidebar_width: f32,
}

impl GoldfishMapApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        records: Option<Vec<LocationRecord>>,
    ) -> Self {
        ui::fonts::install_cjk_font(&cc.egui_ctx, config.cjk_font_path.as_deref());

        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("goldfish-map")
            .join("tiles");
        let http_options = HttpOptions {
            cache: Some(cache_dir),
            ..Default::default()
        };
        let source = TemplateTileSource::new(config.tile_url.clone(), &config.tile_attribution);
        let tiles = HttpTiles::with_options(source, http_options, cc.egui_ctx.clone());

        let map = EguiMap::new(config.initial_center(), config.initial_zoom);
        let controller = MapController::new(records, map, EguiSidebar::new(), config.focus_options());
        info!(
            "Showing {} of {} sites",
            controller.visible_count(),
            controller.records().len()
        );

        Self {
            controller,
            tiles,
            filter_bar: FilterBar::new(),
            sidebar_width: config.sidebar_width,
        }
    }

    fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("🐟 金魚マップ")
                .size(18.0)
                .strong()
                .color(egui::Color32::from_rgb(190, 18, 60)),
        );
        ui.add_space(6.0);

        match self.filter_bar.show(ui, self.controller.filter_state()) {
            Some(FilterEvent::Category(category)) => self.controller.select_category(category),
            Some(FilterEvent::Query(query)) => self.controller.set_search_query(query),
            None => {}
        }

        ui.add_space(4.0);
        ui::filter_bar::result_count(
            ui,
            self.controller.visible_count(),
            self.controller.records().len(),
        );
        ui.separator();

        if let Some(entry) = self.controller.sidebar_mut().show(ui) {
            self.controller.entry_clicked(entry);
        }
    }
}

impl eframe::App for GoldfishMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("location_sidebar")
            .default_width(self.sidebar_width)
            .resizable(true)
            .show(ctx, |ui| {
                self.draw_sidebar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                match self.controller.map_mut().show(ui, &mut self.tiles) {
                    Some(MapClick::Pin(pin)) => {
                        self.controller.pin_clicked(pin);
                    }
                    Some(MapClick::Background) | None => {}
                }
            });
    }
}
