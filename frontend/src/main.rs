use frontend::app::{DashboardApp, DashboardAppProps};
use frontend::config::DashboardConfig;

fn main() {
    let (config, config_error) = match DashboardConfig::from_document() {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    frontend::logging::init(&config.log_level);
    if let Some(err) = config_error {
        log::warn!("{err}; using default configuration");
    }

    yew::Renderer::<DashboardApp>::with_props(DashboardAppProps { config }).render();
}
