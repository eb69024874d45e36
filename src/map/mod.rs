// Map integration: FFI bindings to Leaflet, the owned map handle, and the
// one-time stylesheet side effect.

pub mod handle;
pub mod leaflet;
pub mod stylesheet;

pub use handle::{MapError, MapHandle};
pub use stylesheet::ensure_stylesheet;
