use std::fmt;

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use super::{leaflet, stylesheet};
use crate::config::CONFIG;
use crate::models::Coordinates;

/// Errors raised while mounting a map instance. They never reach the
/// component's caller; the hook logs them and leaves the panel empty.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// No `window`/`document`, so not running inside a browser page.
    NoDocument,
    /// The component rendered no usable container element.
    ContainerMissing,
    /// The mapping library threw while creating the widget.
    Js(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NoDocument => write!(f, "document is not available"),
            MapError::ContainerMissing => write!(f, "map container element is missing"),
            MapError::Js(msg) => write!(f, "mapping library error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        MapError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Options object handed to `L.tileLayer`.
#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
}

/// An owned, mounted map widget. Created on first mount of a component
/// instance; at most one exists per instance at any time. Dropping it
/// removes the widget from the page.
pub struct MapHandle {
    map: leaflet::Map,
    zoom: f64,
}

impl MapHandle {
    /// Instantiate a map inside `container`, centered on `center` at the
    /// configured zoom, with a single tile layer attached.
    ///
    /// Ensures the Leaflet stylesheet is present first (idempotent,
    /// process-wide).
    pub fn mount(container: &HtmlElement, center: Coordinates) -> Result<Self, MapError> {
        stylesheet::ensure_stylesheet()?;

        let zoom = CONFIG.map.default_zoom;
        // Own the widget before the remaining fallible steps: an early
        // return drops the handle, which removes the half-built widget
        // from the page again.
        let handle = Self {
            map: leaflet::map(container)?,
            zoom,
        };
        handle.map.set_view(&lat_lng(center), zoom);

        let options = serde_wasm_bindgen::to_value(&TileLayerOptions {
            attribution: &CONFIG.map.tile_attribution,
        })
        .map_err(|e| MapError::Js(e.to_string()))?;
        leaflet::tile_layer(&CONFIG.map.tile_url_template, &options)?.add_to(&handle.map);

        log::info!(
            "🗺️ Map mounted at ({}, {}) zoom {}",
            center.latitude,
            center.longitude,
            zoom
        );
        Ok(handle)
    }

    /// Re-center the already-mounted map, keeping the zoom chosen at mount.
    pub fn set_center(&self, center: Coordinates) {
        self.map.set_view(&lat_lng(center), self.zoom);
        log::info!(
            "🎯 Map re-centered to ({}, {})",
            center.latitude,
            center.longitude
        );
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
        log::info!("🧹 Map instance removed");
    }
}

/// Leaflet takes `[lat, lng]` arrays wherever a LatLng is expected.
fn lat_lng(center: Coordinates) -> JsValue {
    js_sys::Array::of2(
        &JsValue::from_f64(center.latitude),
        &JsValue::from_f64(center.longitude),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(MapError::NoDocument.to_string(), "document is not available");
        assert_eq!(
            MapError::ContainerMissing.to_string(),
            "map container element is missing"
        );
        assert_eq!(
            MapError::Js("L is not defined".to_string()).to_string(),
            "mapping library error: L is not defined"
        );
    }
}
