use portfolio_site::app::App;
use portfolio_site::config::{self, SiteConfig};

fn main() {
    let site = config::site();
    wasm_logger::init(wasm_logger::Config::new(site.log_level));
    if let Err(e) = SiteConfig::from_build_env() {
        log::warn!("Ignoring build-time overrides: {}", e);
    }
    gloo_console::log!("portfolio-site", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Starting with reveal threshold {} and {}ms stagger",
        site.reveal_threshold,
        site.stagger_ms
    );
    yew::Renderer::<App>::new().render();
}
