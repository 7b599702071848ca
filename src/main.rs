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

mod app;
mod config;
mod map;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use goldfish_core::{dataset, LocationRecord};
use log::{error, info, warn};

use app::GoldfishMapApp;
use config::AppConfig;

/// Map of goldfish exhibits, farms and events
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with location records (overrides the configured data_path)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Overwrite the config file with default settings before starting
    #[arg(long)]
    reset_config: bool,
}

/// Load the data set; a missing or broken file leaves the map empty
fn load_records(path: Option<PathBuf>) -> Option<Vec<LocationRecord>> {
    let Some(path) = path else {
        warn!("No data file configured; starting with an empty map");
        return None;
    };

    match dataset::load_from_path(&path) {
        Ok(records) => Some(records),
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting Goldfish Map...");

    let config = if args.reset_config {
        let config = AppConfig::default();
        if let Err(e) = config.save() {
            warn!("Failed to write default configuration: {}", e);
        }
        config
    } else {
        AppConfig::load_or_default()
    };
    if let Ok(path) = AppConfig::get_config_path() {
        info!("Configuration file: {}", path.display());
    }

    let records = load_records(args.data.or_else(|| config.data_path.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Goldfish Map"),
        ..Default::default()
    };

    eframe::run_native(
        "Goldfish Map",
        options,
        Box::new(move |cc| Ok(Box::new(GoldfishMapApp::new(cc, &config, records)))),
    )
}
