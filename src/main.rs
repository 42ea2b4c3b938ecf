use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use swap_router::core::{PoolIndex, RouterError};
use swap_router::orchestrator::{get_best_route, load_pool_index};
use swap_router::types::{
    ReloadResponse, RouteRequest, RouteResponse, RouterConfig, StepResponse,
};
use tokio::sync::RwLock;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const CONFIG_FILE: &str = "router_config.toml";

// Shared across handlers; reload swaps the inner Arc so in-flight searches keep their snapshot
#[derive(Clone)]
struct RouterState {
    config: Arc<RouterConfig>,
    index: Arc<RwLock<Arc<PoolIndex>>>,
}

type ApiError = (StatusCode, String);

// Generate the OpenAPI schema
#[derive(OpenApi)]
#[openapi(
    paths(get_route, reload_pools),
    components(schemas(RouteResponse, StepResponse, ReloadResponse)),
    tags(
        (name = "route", description = "Best single-path swap route between two tokens"),
        (name = "pools", description = "Pool data management")
    )
)]
struct ApiDoc;

fn to_api_error(err: anyhow::Error) -> ApiError {
    if err.downcast_ref::<RouterError>().is_some() {
        return (StatusCode::BAD_REQUEST, err.to_string());
    }
    error!(error = %format!("{err:#}"), "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}"))
}

#[utoipa::path(
    get,
    path = "/route",
    params(RouteRequest),
    responses(
        (status = 200, description = "Best route", body = RouteResponse),
        (status = 400, description = "Malformed request"),
        (status = 404, description = "No route connects the tokens within the hop bound")
    ),
    tag = "route"
)]
async fn get_route(
    State(state): State<RouterState>,
    Query(params): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let index = state.index.read().await.clone();
    let config = state.config.clone();

    // The search is CPU-bound; keep it off the async workers
    let response = tokio::task::spawn_blocking(move || get_best_route(&config, &index, &params))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map_err(to_api_error)?;

    match response {
        Some(route) => Ok(Json(route)),
        None => Err((StatusCode::NOT_FOUND, "No route found".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/reload_pools",
    responses(
        (status = 200, description = "Pool file re-read and index rebuilt", body = ReloadResponse)
    ),
    tag = "pools"
)]
async fn reload_pools(
    State(state): State<RouterState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let config = state.config.clone();
    let index = tokio::task::spawn_blocking(move || load_pool_index(&config))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map_err(to_api_error)?;

    let pools = index.pool_count();
    *state.index.write().await = Arc::new(index);
    info!(pools, "reloaded pool index");
    Ok(Json(ReloadResponse { pools }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RouterConfig::load_from(CONFIG_FILE)?;

    let level = config.log_level()?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let index = load_pool_index(&config)?;
    info!(pools = index.pool_count(), "pool index ready");

    let state = RouterState {
        config: Arc::new(config.clone()),
        index: Arc::new(RwLock::new(Arc::new(index))),
    };

    let openapi = ApiDoc::openapi();
    let app = Router::new()
        .route("/route", get(get_route))
        .route("/reload_pools", post(reload_pools))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.listen_address.as_str()).await?;
    info!(address = %listener.local_addr()?, "swap router listening");
    info!("Swagger UI available at /swagger-ui/");

    axum::serve(listener, app).await?;
    Ok(())
}
