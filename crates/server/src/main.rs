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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cert_track_api::{
    ApiError, ApplicationFilter, ApplicationStatusResponse, ApproveStageResponse,
    AuditTrailResponse, CheckDuplicateRequest, CheckDuplicateResponse, DashboardSummaryResponse,
    ExportResponse, SearchResponse, StageQueueResponse, SubmitApplicationRequest,
    SubmitApplicationResponse, VerifiedListResponse, approve_stage, check_duplicate,
    current_timestamp, dashboard_summary, export_applications, find_status_by_identity,
    get_application_status, get_verified_certificate, list_audit_events, list_stage_queue,
    list_verified_certificates, parse_stage, search_by_identity, submit_application,
};
use cert_track_audit::Cause;
use cert_track_domain::Stage;
use cert_track_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Certificate tracker server - HTTP server for certificate applications
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
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex so writers are serialised.
#[derive(Clone)]
struct AppState {
    /// The record store.
    store: Arc<Mutex<Persistence>>,
}

/// Header carrying a caller-supplied request identifier.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Query parameters carrying a hall ticket.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HallTicketQuery {
    /// The hall ticket / roll number.
    hall_ticket: String,
}

/// Query parameters for the export endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportQuery {
    /// First submission date (inclusive).
    from: String,
    /// Last submission date (inclusive).
    to: String,
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
            ApiError::DomainRuleViolation { .. } if err.is_duplicate_application() => {
                StatusCode::CONFLICT
            }
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Builds the audit cause for a request.
///
/// Uses the caller's request identifier when one is supplied.
fn request_cause(headers: &HeaderMap, description: &str) -> Cause {
    let id: String = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| String::from("http"), ToString::to_string);
    Cause::new(id, description.to_string())
}

/// Handler for POST `/applications` endpoint.
///
/// Submits a new certificate application.
async fn handle_submit_application(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<Json<SubmitApplicationResponse>, HttpError> {
    info!(
        roll_number = %req.roll_number,
        certificate_type = %req.certificate_type,
        "Handling submit_application request"
    );

    let cause: Cause = request_cause(&headers, "Application submitted");
    let response: SubmitApplicationResponse = {
        let mut store = app_state.store.lock().await;
        submit_application(&mut *store, req, current_timestamp(), cause)?
    };
    Ok(Json(response))
}

/// Handler for POST `/applications/check_duplicate` endpoint.
async fn handle_check_duplicate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckDuplicateRequest>,
) -> Result<Json<CheckDuplicateResponse>, HttpError> {
    let response: CheckDuplicateResponse = {
        let mut store = app_state.store.lock().await;
        check_duplicate(&mut *store, &req)?
    };
    Ok(Json(response))
}

/// Handler for GET `/applications/{application_number}` endpoint.
async fn handle_get_application(
    AxumState(app_state): AxumState<AppState>,
    Path(application_number): Path<String>,
) -> Result<Json<ApplicationStatusResponse>, HttpError> {
    let response: ApplicationStatusResponse = {
        let mut store = app_state.store.lock().await;
        get_application_status(&mut *store, &application_number)?
    };
    Ok(Json(response))
}

/// Handler for GET `/applications/{application_number}/audit` endpoint.
async fn handle_get_audit_trail(
    AxumState(app_state): AxumState<AppState>,
    Path(application_number): Path<String>,
) -> Result<Json<AuditTrailResponse>, HttpError> {
    let response: AuditTrailResponse = {
        let mut store = app_state.store.lock().await;
        list_audit_events(&mut *store, &application_number)?
    };
    Ok(Json(response))
}

/// Handler for GET `/stages/{slug}` endpoint.
///
/// Lists the applications waiting on one stage.
async fn handle_stage_queue(
    AxumState(app_state): AxumState<AppState>,
    Path(slug): Path<String>,
    Query(filter): Query<ApplicationFilter>,
) -> Result<Json<StageQueueResponse>, HttpError> {
    let stage: Stage = parse_stage(&slug)?;
    let response: StageQueueResponse = {
        let mut store = app_state.store.lock().await;
        list_stage_queue(&mut *store, stage, &filter)?
    };
    Ok(Json(response))
}

/// Handler for POST `/stages/{slug}/{application_number}/approve` endpoint.
///
/// Approves one stage of an application.
async fn handle_approve_stage(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((slug, application_number)): Path<(String, String)>,
) -> Result<Json<ApproveStageResponse>, HttpError> {
    info!(
        stage = %slug,
        application_number = %application_number,
        "Handling approve_stage request"
    );

    let stage: Stage = parse_stage(&slug)?;
    let cause: Cause = request_cause(&headers, &format!("{} approval", stage.display_name()));
    let response: ApproveStageResponse = {
        let mut store = app_state.store.lock().await;
        approve_stage(
            &mut *store,
            &application_number,
            stage,
            current_timestamp(),
            &cause,
        )?
    };
    if !response.applied {
        warn!(
            stage = %slug,
            application_number = %application_number,
            "Stage already recorded; nothing changed"
        );
    }
    Ok(Json(response))
}

/// Handler for GET `/status` endpoint.
///
/// Student portal lookup by hall ticket.
async fn handle_status(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HallTicketQuery>,
) -> Result<Json<ApplicationStatusResponse>, HttpError> {
    let response: ApplicationStatusResponse = {
        let mut store = app_state.store.lock().await;
        find_status_by_identity(&mut *store, &query.hall_ticket)?
    };
    Ok(Json(response))
}

/// Handler for GET `/admin/summary` endpoint.
async fn handle_admin_summary(
    AxumState(app_state): AxumState<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> Result<Json<DashboardSummaryResponse>, HttpError> {
    let response: DashboardSummaryResponse = {
        let mut store = app_state.store.lock().await;
        dashboard_summary(&mut *store, &filter)?
    };
    Ok(Json(response))
}

/// Handler for GET `/admin/search` endpoint.
async fn handle_admin_search(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HallTicketQuery>,
) -> Result<Json<SearchResponse>, HttpError> {
    let response: SearchResponse = {
        let mut store = app_state.store.lock().await;
        search_by_identity(&mut *store, &query.hall_ticket)?
    };
    Ok(Json(response))
}

/// Handler for GET `/admin/export` endpoint.
///
/// Returns the CSV document as an attachment.
async fn handle_admin_export(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, HttpError> {
    let export: ExportResponse = {
        let mut store = app_state.store.lock().await;
        export_applications(&mut *store, &query.from, &query.to)?
    };

    let disposition: String = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}

/// Handler for GET `/verified` endpoint.
async fn handle_list_verified(
    AxumState(app_state): AxumState<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> Result<Json<VerifiedListResponse>, HttpError> {
    let response: VerifiedListResponse = {
        let mut store = app_state.store.lock().await;
        list_verified_certificates(&mut *store, &filter)?
    };
    Ok(Json(response))
}

/// Handler for GET `/verified/{application_number}` endpoint.
async fn handle_get_verified(
    AxumState(app_state): AxumState<AppState>,
    Path(application_number): Path<String>,
) -> Result<Json<ApplicationStatusResponse>, HttpError> {
    let response: ApplicationStatusResponse = {
        let mut store = app_state.store.lock().await;
        get_verified_certificate(&mut *store, &application_number)?
    };
    Ok(Json(response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/applications", post(handle_submit_application))
        .route(
            "/applications/check_duplicate",
            post(handle_check_duplicate),
        )
        .route("/applications/{application_number}", get(handle_get_application))
        .route(
            "/applications/{application_number}/audit",
            get(handle_get_audit_trail),
        )
        .route("/stages/{slug}", get(handle_stage_queue))
        .route(
            "/stages/{slug}/{application_number}/approve",
            post(handle_approve_stage),
        )
        .route("/status", get(handle_status))
        .route("/admin/summary", get(handle_admin_summary))
        .route("/admin/search", get(handle_admin_search))
        .route("/admin/export", get(handle_admin_export))
        .route("/verified", get(handle_list_verified))
        .route("/verified/{application_number}", get(handle_get_verified))
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

    info!("Initializing certificate tracker server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
