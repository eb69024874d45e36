use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub map: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            map: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url_template: String,
    pub tile_attribution: String,
    pub stylesheet_url: String,
    pub container_width_px: u32,
    pub container_height_px: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Central London.
            default_center_lat: 51.505,
            default_center_lng: -0.09,
            default_zoom: 13.0,
            tile_url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution:
                r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#
                    .to_string(),
            stylesheet_url: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
            container_width_px: 600,
            container_height_px: 400,
        }
    }
}

impl MapConfig {
    pub fn default_center(&self) -> Coordinates {
        Coordinates::new(self.default_center_lat, self.default_center_lng)
    }

    /// Inline style pinning the container to its fixed dimensions.
    pub fn container_style(&self) -> String {
        format!(
            "width: {}px; height: {}px;",
            self.container_width_px, self.container_height_px
        )
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment overrides
    /// (fed by build.rs from .env), falling back to the defaults above.
    pub fn from_env() -> Self {
        let defaults = MapConfig::default();

        Self {
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("51.505").parse().unwrap_or(defaults.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("-0.09").parse().unwrap_or(defaults.default_center_lng),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("13").parse().unwrap_or(defaults.default_zoom),
                tile_url_template: option_env!("TILE_URL_TEMPLATE")
                    .map(str::to_string).unwrap_or(defaults.tile_url_template),
                tile_attribution: option_env!("TILE_ATTRIBUTION")
                    .map(str::to_string).unwrap_or(defaults.tile_attribution),
                stylesheet_url: option_env!("LEAFLET_CSS_URL")
                    .map(str::to_string).unwrap_or(defaults.stylesheet_url),
                container_width_px: option_env!("MAP_WIDTH_PX")
                    .unwrap_or("600").parse().unwrap_or(defaults.container_width_px),
                container_height_px: option_env!("MAP_HEIGHT_PX")
                    .unwrap_or("400").parse().unwrap_or(defaults.container_height_px),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_central_london_at_zoom_13() {
        let config = MapConfig::default();
        assert_eq!(config.default_center(), Coordinates::new(51.505, -0.09));
        assert_eq!(config.default_zoom, 13.0);
    }

    #[test]
    fn defaults_point_at_openstreetmap() {
        let config = MapConfig::default();
        assert_eq!(
            config.tile_url_template,
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
        assert!(config.tile_attribution.contains("openstreetmap.org/copyright"));
        assert!(config.tile_attribution.contains("OpenStreetMap"));
        assert!(config.stylesheet_url.ends_with("leaflet.css"));
    }

    #[test]
    fn container_style_is_fixed_600_by_400() {
        let style = MapConfig::default().container_style();
        assert_eq!(style, "width: 600px; height: 400px;");
    }

    #[test]
    fn from_env_without_overrides_matches_defaults() {
        // No .env in this tree, so option_env! yields the fallbacks.
        let config = AppConfig::from_env();
        assert!(config.enable_logging);
        assert_eq!(config.map.default_zoom, MapConfig::default().default_zoom);
        assert_eq!(config.map.container_width_px, 600);
        assert_eq!(config.map.container_height_px, 400);
    }
}
