// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::relay_handler;
use super::middleware::{cors_header_layers, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::providers::ProviderClient;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub providers: Arc<ProviderClient>,
}

pub fn create_router(config: &AppConfig) -> Result<Router> {
    let providers = ProviderClient::new(&config.providers, &config.upstream)?;
    let state = AppState {
        providers: Arc::new(providers),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();
    let [allow_origin, allow_methods, allow_headers] = cors_header_layers();

    // Method and path are resolved inside the handler, so every request lands
    // in the fallback. Layers run top to bottom on the way in.
    let app = Router::new()
        .fallback(relay_handler)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(propagate_request_id)
                .layer(allow_origin)
                .layer(allow_methods)
                .layer(allow_headers)
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state);

    Ok(app)
}
