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

//! Japanese font installation.
//!
//! egui's bundled fonts carry no CJK glyphs, so a system font is added as a
//! fallback for every family.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

const FONT_NAME: &str = "cjk";

/// Well-known font locations, probed in order
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// First readable font: the configured path, else a system candidate
pub fn find_cjk_font(configured: Option<&Path>) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(|candidate| PathBuf::from(*candidate)))
        .find(|path| path.is_file())
}

/// Install a CJK fallback font. Returns false when none was found.
pub fn install_cjk_font(ctx: &egui::Context, configured: Option<&Path>) -> bool {
    let Some(path) = find_cjk_font(configured) else {
        warn!("No Japanese font found; set cjk_font_path in the config file");
        return false;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read font {}: {}", path.display(), e);
            return false;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    info!("Using font {}", path.display());
    true
}
