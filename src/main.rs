use std::sync::Arc;

use terraform_provider_site24x7::{
    build_app, config::Config, logging, provider::Provider, AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let provider = Arc::new(Provider::new());
    let bind_socket = config.bind_socket()?;

    info!(
        resources = provider.resource_names().count(),
        data_sources = provider.data_source_names().count(),
        "provider registry loaded"
    );

    let state = AppState::new(config.plugin_token.clone(), provider);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        "plugin server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
