pub mod auth;
pub mod payload;
pub mod resources;

use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::resources::{
    circuit::CircuitResource, circuit_termination::CircuitTerminationResource,
    circuit_type::CircuitTypeResource, provider::ProviderResource, site::SiteResource,
};
use service::Resource;

use crate::openapi::ApiDoc;
use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

#[utoipa::path(get, path = "/api-docs/openapi.json", tag = "health", responses((status = 200, description = "OpenAPI document")))]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// List/create on `/{path}/`, retrieve/replace/delete on `/{path}/:id/`.
pub fn resource_routes<R: Resource>(path: &str) -> Router<ServerState> {
    Router::new()
        .route(
            &format!("/{path}/"),
            get(resources::list::<R>).post(resources::create::<R>),
        )
        .route(
            &format!("/{path}/:id/"),
            get(resources::retrieve::<R>)
                .put(resources::replace::<R>)
                .delete(resources::destroy::<R>),
        )
}

/// Build the full application router: public routes plus the token-protected resources
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .merge(resource_routes::<ProviderResource>("provider"))
        .merge(resource_routes::<CircuitTypeResource>("circuittype"))
        .merge(resource_routes::<CircuitResource>("circuit"))
        .merge(resource_routes::<CircuitTerminationResource>("circuittermination"))
        .merge(resource_routes::<SiteResource>("site"))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
