use std::sync::Arc;

use adw::Application;
use contact_core::config::DEFAULT_API_URL;
use contact_core::{ApiClient, Settings};
use gtk4 as gtk;

use crate::ui::main_window::MainWindow;

pub fn load_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        log::warn!("no display, skipping stylesheet");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(include_str!("ui/style.css"));
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn api_client(settings: &Settings) -> Option<ApiClient> {
    match ApiClient::new(&settings.api_url) {
        Ok(client) => Some(client),
        Err(e) => {
            log::error!("invalid api_url {:?}: {e}; falling back to {DEFAULT_API_URL}", settings.api_url);
            ApiClient::new(DEFAULT_API_URL)
                .map_err(|e| log::error!("default API url rejected: {e}"))
                .ok()
        }
    }
}

pub fn build_ui(app: &Application) {
    let settings = Settings::load();
    let Some(client) = api_client(&settings) else {
        return;
    };
    log::info!("using contact collection at {}", client.collection());

    let window = MainWindow::new(app, &settings, Arc::new(client));
    window.present();
    window.dispatch(contact_core::Event::Started);
}
