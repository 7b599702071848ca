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

use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// GSI pale basemap tiles
pub const GSI_PALE_URL: &str = "https://cyberjapandata.gsi.go.jp/xyz/pale/{z}/{x}/{y}.png";
pub const GSI_ATTRIBUTION: &str = "© 国土地理院";
const GSI_ATTRIBUTION_URL: &str = "https://maps.gsi.go.jp/development/ichiran.html";
const GSI_MAX_ZOOM: u8 = 18;

/// Tile source built from a `{z}/{x}/{y}` URL template
#[derive(Debug, Clone)]
pub struct TemplateTileSource {
    url_template: String,
    attribution: &'static str,
}

impl TemplateTileSource {
    pub fn new(url_template: String, attribution: &str) -> Self {
        // Attribution requires 'static; the source lives for the whole session
        let attribution = if attribution == GSI_ATTRIBUTION {
            GSI_ATTRIBUTION
        } else {
            Box::leak(attribution.to_string().into_boxed_str())
        };
        Self { url_template, attribution }
    }

    pub fn gsi_pale() -> Self {
        Self::new(GSI_PALE_URL.to_string(), GSI_ATTRIBUTION)
    }
}

impl TileSource for TemplateTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.url_template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        let url = if self.attribution == GSI_ATTRIBUTION {
            GSI_ATTRIBUTION_URL
        } else {
            ""
        };
        Attribution {
            text: self.attribution,
            url,
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        GSI_MAX_ZOOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsi_tile_url() {
        let source = TemplateTileSource::gsi_pale();
        let url = source.tile_url(TileId { x: 227, y: 100, zoom: 8 });
        assert_eq!(url, "https://cyberjapandata.gsi.go.jp/xyz/pale/8/227/100.png");
    }

    #[test]
    fn test_custom_attribution() {
        let source = TemplateTileSource::new("https://tiles.example/{z}/{x}/{y}.png".to_string(), "Example");
        assert_eq!(source.attribution().text, "Example");
        assert_eq!(
            source.tile_url(TileId { x: 1, y: 2, zoom: 3 }),
            "https://tiles.example/3/1/2.png"
        );
    }
}
