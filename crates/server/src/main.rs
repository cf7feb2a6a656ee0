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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use suds_api::{
    ApiError, BookingResponse, CreateBookingRequest, ListBookingsResponse, QuoteRequest,
    QuoteResponse, UpdateStatusRequest, build_draft, get_booking, list_bookings, quote,
    submit_draft, update_booking_status,
};
use suds_persistence::SqliteStore;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Suds Server - HTTP server for the Suds booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The booking store sits behind a Mutex to allow safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for bookings.
    store: Arc<Mutex<SqliteStore>>,
}

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
struct ListBookingsQuery {
    /// Optional lifecycle status filter.
    status: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
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
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::IncompleteDraft { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::SubmissionInFlight => StatusCode::CONFLICT,
            ApiError::Storage { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST /quote endpoint.
///
/// Computes a price and duration preview without persisting anything.
async fn handle_quote(Json(req): Json<QuoteRequest>) -> Result<Json<QuoteResponse>, HttpError> {
    info!(
        service_type = %req.service_type,
        size_sqm = req.size_sqm,
        "Handling quote request"
    );
    let response: QuoteResponse = quote(&req)?;
    Ok(Json(response))
}

/// Handler for POST /bookings endpoint.
///
/// Validates the submission against every form step and persists it.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), HttpError> {
    info!(
        service_type = %req.service_type,
        frequency = %req.frequency,
        date = %req.date,
        "Handling create_booking request"
    );

    let draft = build_draft(&req)?;
    let mut store = app_state.store.lock().await;
    let response: BookingResponse = submit_draft(&draft, &mut *store).map(Into::into)?;
    drop(store);

    info!(
        booking_id = response.booking_id,
        total_price = response.total_price,
        "Successfully created booking"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /bookings endpoint.
///
/// Lists bookings newest first, optionally filtered by status.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    info!(status = ?query.status, "Handling list_bookings request");

    let store = app_state.store.lock().await;
    let response: ListBookingsResponse = list_bookings(&store, query.status.as_deref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
///
/// Returns a single booking by its identifier.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(booking_id, "Handling get_booking request");

    let store = app_state.store.lock().await;
    let response: BookingResponse = get_booking(&store, booking_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/status` endpoint.
///
/// Moves a booking to a new lifecycle status.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        booking_id,
        status = %req.status,
        "Handling update_status request"
    );

    let mut store = app_state.store.lock().await;
    let response: BookingResponse = update_booking_status(&mut store, booking_id, &req)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET /health endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/quote", post(handle_quote))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route("/bookings/{booking_id}/status", post(handle_update_status))
        .route("/health", get(handle_health))
        .with_state(app_state)
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

    info!("Initializing Suds Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
