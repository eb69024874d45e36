use yew::prelude::*;

use super::MapView;
use crate::config::CONFIG;
use crate::models::Coordinates;

/// Preset locations offered by the demo shell.
const PRESETS: [(&str, f64, f64); 3] = [
    ("London", 51.505, -0.09),
    ("Paris", 48.8566, 2.3522),
    ("Berlin", 52.52, 13.405),
];

/// Demo shell hosting a single `MapView`. Picking a preset updates the
/// component's props, which re-centers the already-mounted widget.
#[function_component(App)]
pub fn app() -> Html {
    let center = use_state(|| CONFIG.map.default_center());

    let on_preset = {
        let center = center.clone();
        Callback::from(move |coords: Coordinates| {
            log::info!(
                "📍 Center changed to ({}, {})",
                coords.latitude,
                coords.longitude
            );
            center.set(coords);
        })
    };

    html! {
        <>
            <header class="app-header">
                <h1>{"Map View"}</h1>
                <div class="header-actions">
                    {
                        PRESETS.iter().map(|&(name, lat, lng)| {
                            let on_preset = on_preset.clone();
                            let coords = Coordinates::new(lat, lng);
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_preset.emit(coords)
                            });
                            html! {
                                <button key={name} class="btn-preset" {onclick}>
                                    { name }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </header>

            <MapView lat={center.latitude} long={center.longitude} />
        </>
    }
}
