pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod utils;

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, header::LINK, header::LOCATION};
use tower_http::cors::{AllowOrigin, Any, CorsLayer, ExposeHeaders};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::utils::pagination::X_TOTAL_COUNT;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "1.0.0",
        description = "CRUD API for blogs owned by users"
    ),
    tags(
        (name = "Blogs", description = "Blog CRUD operations"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config);
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(cors)
}

/// CORS for the configured origins. Pagination and alert headers are exposed
/// so browser clients can read them.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = &config.server.cors;
    let origins: Vec<HeaderValue> = cors
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let app = &config.app.name;
    let mut exposed = vec![LINK, LOCATION, X_TOTAL_COUNT.clone()];
    for name in [format!("x-{app}-alert"), format!("x-{app}-params")] {
        if let Ok(name) = HeaderName::try_from(name) {
            exposed.push(name);
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(ExposeHeaders::list(exposed))
        .max_age(Duration::from_secs(cors.max_age))
}
