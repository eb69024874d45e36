// ============================================================================
// MAP VIEW - a Leaflet map component for Yew
// ============================================================================
// The interesting part is the lifecycle contract:
// - the widget is instantiated exactly once per component instance,
// - coordinate changes re-center the existing instance (no re-mount),
// - unmounting removes the widget again,
// - the Leaflet stylesheet is injected into the page at most once.
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod map;
pub mod models;

pub use components::{App, MapView, MapViewProps};
pub use hooks::{use_map, UseMapHandle};
pub use map::{MapError, MapHandle};
pub use models::Coordinates;
