// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use salary_board::DEFAULT_MAX_ENTRY_BEFORE_DISPLAY;
use salary_board_api::{
    ApiError, AverageRatingRequest, AverageRatingResponse, CompanyResponse, ImportSummary,
    ListRatingsRequest, ListRatingsResponse, ServiceConfig, SubmitRatingRequest, average_rating,
    get_rating, import_ratings, list_companies, list_ratings, parse_rating_id, submit_rating,
};
use salary_board_domain::Rating;
use salary_board_persistence::SqlitePersistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Salary Board Server - HTTP server for salary and rating submissions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Submissions a company needs before it appears in `/companies`
    #[arg(long, default_value_t = DEFAULT_MAX_ENTRY_BEFORE_DISPLAY)]
    max_entry_before_display: u64,

    /// JSON file of complete ratings to load at startup
    #[arg(long)]
    seed: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The rating store.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// Settings for the API operations.
    config: ServiceConfig,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Handler for GET `/ratings` endpoint.
///
/// Lists one page of ratings matching the query filters.
async fn handle_list_ratings(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListRatingsRequest>, QueryRejection>,
) -> Result<Json<ListRatingsResponse>, HttpError> {
    let Query(request) = query?;
    info!(
        page = ?request.page,
        limit = ?request.limit,
        company = ?request.company,
        jobtitle = ?request.jobtitle,
        "Handling list_ratings request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = list_ratings(&mut *persistence, &request);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for GET `/ratings/{id}` endpoint.
async fn handle_get_rating(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Rating>, HttpError> {
    info!(id = %raw_id, "Handling get_rating request");

    let salary_id: i64 = parse_rating_id(&raw_id)?;

    let mut persistence = app_state.persistence.lock().await;
    let result = get_rating(&mut *persistence, salary_id);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for POST `/ratings` endpoint.
///
/// Stores a submission and returns it with its assigned id.
async fn handle_submit_rating(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<SubmitRatingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Rating>), HttpError> {
    let Json(request) = payload?;
    info!(
        company_name = %request.company_name,
        job_title = %request.job_title,
        "Handling submit_rating request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = submit_rating(&mut *persistence, request);
    drop(persistence);

    Ok((StatusCode::CREATED, Json(result?)))
}

/// Handler for GET `/average-rating` endpoint.
async fn handle_average_rating(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<AverageRatingRequest>, QueryRejection>,
) -> Result<Json<AverageRatingResponse>, HttpError> {
    let Query(request) = query?;
    info!(
        company = ?request.company,
        jobtitle = ?request.jobtitle,
        city = ?request.city,
        seniority = ?request.seniority,
        "Handling average_rating request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = average_rating(&mut *persistence, &request);
    drop(persistence);

    Ok(Json(result?))
}

/// Handler for GET `/companies` endpoint.
///
/// Lists companies with at least the configured number of submissions.
async fn handle_list_companies(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, HttpError> {
    info!(
        threshold = app_state.config.max_entry_before_display,
        "Handling list_companies request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = list_companies(&mut *persistence, &app_state.config);
    drop(persistence);

    Ok(Json(result?))
}

/// Fallback for unknown routes.
async fn handle_not_found() -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: String::from("route not found"),
    }
}

/// Every response body is JSON; clients expect the charset spelled out.
async fn set_json_content_type(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    response
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/ratings", get(handle_list_ratings).post(handle_submit_rating))
        .route("/ratings/{id}", get(handle_get_rating))
        .route("/average-rating", get(handle_average_rating))
        .route("/companies", get(handle_list_companies))
        .fallback(handle_not_found)
        .layer(middleware::map_response(set_json_content_type))
        .with_state(app_state)
}

/// Reads a JSON array of complete ratings.
fn load_seed_file(path: &FsPath) -> Result<Vec<Rating>, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let ratings: Vec<Rating> = serde_json::from_str(&contents)?;
    Ok(ratings)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Salary Board Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    if let Some(seed_path) = &args.seed {
        info!("Seeding ratings from: {}", seed_path.display());
        let ratings: Vec<Rating> = load_seed_file(seed_path)?;
        let summary: ImportSummary = import_ratings(&mut persistence, ratings)?;
        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "Seeding complete"
        );
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: ServiceConfig::new(args.max_entry_before_display),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
