mod app;
mod logging;
mod pages;

use app::App;
use catalog_core::ApiConfig;
use catalog_frontend_common::configure_api;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    match ApiConfig::resolve(option_env!("CATALOG_API_URL")) {
        Ok(config) => {
            tracing::info!(base_url = %config.base_url, "Using content API");
            configure_api(config);
        }
        Err(err) => tracing::error!("Ignoring CATALOG_API_URL: {err}"),
    }

    yew::Renderer::<App>::new().render();
}
