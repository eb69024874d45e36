use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_map;
use crate::models::Coordinates;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub lat: f64,
    pub long: f64,
}

/// Interactive map panel of fixed size (600×400 by default).
///
/// Mounts the map widget into its own container on first render, re-centers
/// the existing widget when `lat`/`long` change, and removes it on unmount.
/// Failures never reach the caller; they are logged and the panel stays
/// empty.
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container = use_node_ref();
    let map = use_map(container.clone(), Coordinates::new(props.lat, props.long));

    html! {
        <div
            ref={container}
            class="map-view"
            style={CONFIG.map.container_style()}
            data-map-ready={map.mounted().to_string()}
        />
    }
}
