// ============================================================================
// LEAFLET FFI - bindings to the global `L` namespace
// ============================================================================
// Only wrappers for JS functions - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// A mounted map instance (`L.Map`).
    pub type Map;

    /// A raster tile overlay (`L.TileLayer`).
    pub type TileLayer;

    /// `L.map(container)`: instantiate a map inside `container`.
    ///
    /// Throws if Leaflet is not loaded or the element is unusable, hence
    /// the `catch`.
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn map(container: &HtmlElement) -> Result<Map, JsValue>;

    /// `map.setView([lat, lng], zoom)`.
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    /// `map.remove()`: tear the widget down and release its DOM.
    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    /// `L.tileLayer(urlTemplate, options)`.
    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    /// `tileLayer.addTo(map)`.
    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);
}
