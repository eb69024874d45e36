use map_view::config::CONFIG;
use map_view::App;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Map View starting...");

    yew::Renderer::<App>::new().render();
}
