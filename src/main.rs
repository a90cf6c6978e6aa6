use activity_board::config::ClientConfig;
use activity_board::App;
use dioxus::prelude::*;

fn main() {
    let loaded = ClientConfig::load();
    let level = loaded.as_ref().map(|c| c.log_level).unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[Logger] init failed: {e}");
    }
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration, using defaults");
            ClientConfig::default()
        }
    };
    tracing::info!(api = %config.api_base_url, "starting activity board");
    LaunchBuilder::new().with_context(config).launch(App);
}
