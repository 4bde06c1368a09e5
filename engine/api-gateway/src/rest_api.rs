//! REST API endpoints for the ApiGateway
//!
//! Player search and lookups, era-adjusted stats, comparison generation and
//! the health check. Domain errors become [`ApiError`] rejections and are
//! rendered by [`handle_rejection`].

use crate::error::ApiError;
use analysis_engine::AnalysisGenerator;
use comparison_engine::{ComparisonOrchestrator, ComparisonRequest};
use player_registry::{PlayerId, PlayerRepository};
use serde::Serialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// Shared, read-only state handed to every handler
pub struct ApiContext {
    pub repository: Arc<dyn PlayerRepository>,
    pub orchestrator: Arc<ComparisonOrchestrator>,
    pub analysis: Arc<AnalysisGenerator>,
    /// Hide internal error details from 500 responses
    pub production: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

fn error_reply(
    status: StatusCode,
    code: &str,
    message: String,
    details: Option<serde_json::Value>,
) -> warp::reply::WithStatus<warp::reply::Json> {
    let body = ErrorResponse {
        error: ErrorDetail { code: code.to_string(), message, details },
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    warp::reply::with_status(warp::reply::json(&body), status)
}

fn reject(err: impl Into<ApiError>) -> Rejection {
    warp::reject::custom(err.into())
}

/// Search players by name or team
pub async fn search_players(
    params: HashMap<String, String>,
    ctx: Arc<ApiContext>,
) -> Result<impl Reply, Rejection> {
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    let players = ctx.repository.search(query).await.map_err(reject)?;
    Ok(warp::reply::json(&players))
}

/// Get every player
pub async fn list_players(ctx: Arc<ApiContext>) -> Result<impl Reply, Rejection> {
    let players = ctx.repository.list_players().await.map_err(reject)?;
    Ok(warp::reply::json(&players))
}

/// Get player details by ID
pub async fn get_player(id: PlayerId, ctx: Arc<ApiContext>) -> Result<impl Reply, Rejection> {
    let player = ctx.repository.get_by_id(id).await.map_err(reject)?;
    Ok(warp::reply::json(&player))
}

/// Get career stats by player ID
pub async fn get_player_stats(id: PlayerId, ctx: Arc<ApiContext>) -> Result<impl Reply, Rejection> {
    let stats = ctx.repository.get_stats(id).await.map_err(reject)?;
    Ok(warp::reply::json(&stats))
}

/// Get achievements by player ID
pub async fn get_player_achievements(
    id: PlayerId,
    ctx: Arc<ApiContext>,
) -> Result<impl Reply, Rejection> {
    let achievements = ctx.repository.get_achievements(id).await.map_err(reject)?;
    Ok(warp::reply::json(&achievements))
}

/// Get career stats projected onto the modern era
pub async fn get_era_adjusted_stats(
    id: PlayerId,
    ctx: Arc<ApiContext>,
) -> Result<impl Reply, Rejection> {
    let player = ctx.repository.get_by_id(id).await.map_err(reject)?;
    let stats = ctx.repository.get_stats(id).await.map_err(reject)?;

    let adjusted = ctx.analysis.era_adjusted_stats(&stats, player.year_start, player.year_end).await;
    Ok(warp::reply::json(&adjusted))
}

/// Generate a comparison between multiple players
pub async fn generate_comparison(
    request: ComparisonRequest,
    ctx: Arc<ApiContext>,
) -> Result<impl Reply, Rejection> {
    let result = ctx.orchestrator.generate(request).await.map_err(reject)?;
    Ok(warp::reply::json(&result))
}

/// Render every rejection as a JSON error envelope
pub async fn handle_rejection(err: Rejection, production: bool) -> Result<impl Reply, Infallible> {
    if let Some(api_error) = err.find::<ApiError>() {
        return Ok(match api_error {
            ApiError::InvalidInput(message) => {
                error_reply(StatusCode::BAD_REQUEST, "INVALID_INPUT", message.clone(), None)
            }
            ApiError::NotFound(message) => {
                error_reply(StatusCode::NOT_FOUND, "NOT_FOUND", message.clone(), None)
            }
            ApiError::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                let details = if production {
                    serde_json::json!({})
                } else {
                    serde_json::Value::String(message.clone())
                };
                error_reply(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Server error".to_string(),
                    Some(details),
                )
            }
        });
    }

    if err.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found".to_string(), None));
    }

    if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "INVALID_INPUT",
            format!("Invalid request body: {e}"),
            None,
        ));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            "METHOD_NOT_ALLOWED",
            "Method not allowed".to_string(),
            None,
        ));
    }

    tracing::error!("Unhandled rejection: {:?}", err);
    let details = if production { serde_json::json!({}) } else { serde_json::json!(format!("{err:?}")) };
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Server error".to_string(),
        Some(details),
    ))
}

/// Create REST API routes
pub fn create_routes(
    ctx: Arc<ApiContext>,
    cors_allowed_origins: &[String],
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let production = ctx.production;
    let ctx_filter = warp::any().map(move || ctx.clone());

    // Search endpoint
    let search = warp::path!("players" / "search")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(ctx_filter.clone())
        .and_then(search_players);

    // Full roster
    let roster = warp::path!("players").and(warp::get()).and(ctx_filter.clone()).and_then(list_players);

    // Player details
    let player = warp::path!("players" / PlayerId)
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(get_player);

    // Player stats
    let stats = warp::path!("players" / PlayerId / "stats")
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(get_player_stats);

    // Era-adjusted stats
    let era_adjusted = warp::path!("players" / PlayerId / "stats" / "era-adjusted")
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(get_era_adjusted_stats);

    // Player achievements
    let achievements = warp::path!("players" / PlayerId / "achievements")
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(get_player_achievements);

    // Comparison endpoint
    let comparison = warp::path!("comparison" / "generate")
        .and(warp::post())
        .and(warp::body::json::<ComparisonRequest>())
        .and(ctx_filter)
        .and_then(generate_comparison);

    // Health check endpoint
    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({ "status": "ok" })));

    let cors = if cors_allowed_origins.is_empty() {
        warp::cors().allow_any_origin()
    } else {
        warp::cors().allow_origins(cors_allowed_origins.iter().map(String::as_str))
    };

    // Combine all routes
    search
        .or(roster)
        .or(player)
        .or(stats)
        .or(era_adjusted)
        .or(achievements)
        .or(comparison)
        .or(health)
        .recover(move |err| handle_rejection(err, production))
        .with(warp::trace::request())
        .with(
            cors.allow_headers(vec!["content-type"]).allow_methods(vec!["GET", "POST", "OPTIONS"]),
        )
}
