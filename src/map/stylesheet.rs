use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;

use super::MapError;
use crate::config::CONFIG;

/// DOM id carried by the injected `<link>`, so repeated mounts can tell the
/// stylesheet is already there.
pub const STYLESHEET_ID: &str = "leaflet-css";

/// Inject the Leaflet stylesheet into `<head>` unless it is already present.
///
/// The guard lives in the shared document, so the link exists at most once
/// per page no matter how many components mount or how often. Returns
/// whether this call performed the injection.
pub fn ensure_stylesheet() -> Result<bool, MapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MapError::NoDocument)?;

    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(false);
    }

    let link: HtmlLinkElement = document
        .create_element("link")?
        .dyn_into()
        .map_err(|_| MapError::Js("created element is not a <link>".to_string()))?;
    link.set_id(STYLESHEET_ID);
    link.set_rel("stylesheet");
    link.set_href(&CONFIG.map.stylesheet_url);

    document
        .head()
        .ok_or(MapError::NoDocument)?
        .append_child(&link)?;

    log::info!("🎨 Leaflet stylesheet injected");
    Ok(true)
}
