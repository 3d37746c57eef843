//! emonotate - navigation shell binary
//!
//! With the `server` feature this serves the Dioxus app plus the entry
//! redirect; the `web` build is the hydrating client.

use emonotate::app::App;

#[cfg(feature = "server")]
fn main() {
    use emonotate::app::menu::{check_menu, main_menu};
    use emonotate::app::routes::route_table;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emonotate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting emonotate");

    dioxus::serve(|| async move {
        // Load configuration
        let config = emonotate::config::load_config()?;
        tracing::info!(?config, "Configuration loaded");

        let table = route_table();
        check_menu(table, &main_menu(None))?;
        config.validate(table)?;
        tracing::info!(routes = table.len(), "Route table ready");

        Ok(dioxus::server::router(App).merge(emonotate::server::router(&config)))
    });
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
