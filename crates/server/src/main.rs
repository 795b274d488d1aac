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

mod forward;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use stayview_api::{
    ApiError, BookingCollectionRequest, BookingSubmission, PrepareBookingRequest,
    RenderBookingsRequest, RenderBookingsResponse, RoomTypesResponse, list_room_types,
    prepare_booking, render_bookings, summarize_bookings,
};
use stayview_domain::BookingSummary;

use crate::forward::{Forwarder, handle_forward};

/// Stayview Server - booking dashboard API and backend forwarder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, env = "STAYVIEW_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, env = "STAYVIEW_BIND", default_value = "127.0.0.1")]
    bind: std::net::IpAddr,

    /// Origin of the booking backend that `/api/*` requests are forwarded to
    #[arg(
        short,
        long,
        env = "STAYVIEW_UPSTREAM",
        default_value = "https://hotel-b-cancel-v1.onrender.com"
    )]
    upstream: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Client for the booking backend.
    forwarder: Arc<Forwarder>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is accepting requests.
    status: String,
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
            ApiError::InvalidCriteria { .. } | ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for POST `/view/render` endpoint.
///
/// Filters and sorts the supplied bookings for display.
async fn handle_render(
    Json(req): Json<RenderBookingsRequest>,
) -> Result<Json<RenderBookingsResponse>, HttpError> {
    info!(
        bookings = req.bookings.len(),
        "Handling render_bookings request"
    );

    let response: RenderBookingsResponse = render_bookings(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/view/summary` endpoint.
///
/// Summarizes the full, unfiltered booking collection.
async fn handle_summary(Json(req): Json<BookingCollectionRequest>) -> Json<BookingSummary> {
    info!(
        bookings = req.bookings.len(),
        "Handling summarize_bookings request"
    );

    Json(summarize_bookings(&req))
}

/// Handler for POST `/view/room-types` endpoint.
async fn handle_room_types(Json(req): Json<BookingCollectionRequest>) -> Json<RoomTypesResponse> {
    Json(list_room_types(&req))
}

/// Handler for POST `/bookings/prepare` endpoint.
///
/// Derives lead time, arrival components and stay totals from a booking form.
async fn handle_prepare_booking(
    Json(req): Json<PrepareBookingRequest>,
) -> Result<Json<BookingSubmission>, HttpError> {
    info!(
        room_id = req.room_id,
        check_in_date = %req.check_in_date,
        "Handling prepare_booking request"
    );

    let today: time::Date = time::OffsetDateTime::now_utc().date();
    let submission: BookingSubmission = prepare_booking(&req, today).inspect_err(|e| {
        warn!(error = %e, "Rejected booking form");
    })?;

    Ok(Json(submission))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/view/render", post(handle_render))
        .route("/view/summary", post(handle_summary))
        .route("/view/room-types", post(handle_room_types))
        .route("/bookings/prepare", post(handle_prepare_booking))
        .route("/api", any(handle_forward))
        .route("/api/{*path}", any(handle_forward))
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

    info!("Initializing Stayview Server");

    let forwarder: Forwarder = Forwarder::new(&args.upstream);
    info!("Forwarding /api requests to: {}", forwarder.upstream());

    let app_state: AppState = AppState {
        forwarder: Arc::new(forwarder),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = std::net::SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
