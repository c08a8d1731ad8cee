mod app;
mod ui;
mod utils;

use adw::Application;
use adw::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> glib::ExitCode {
    init_logging();

    let app = Application::builder()
        .application_id("com.example.ContactManager")
        .build();
    app.connect_startup(|_| crate::app::load_css());
    app.connect_activate(crate::app::build_ui);
    app.run()
}
