use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use namescore_core::PresentationProfile;
use namescore_report::{render_report, RawReport, RenderContext, ReportView, Viewer};
use namescore_store::{ReportSession, StoredReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{with_store, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct RenderParams {
    context: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentReportBody {
    report: Value,
    #[serde(default)]
    query: Option<Value>,
}

#[derive(Debug, Serialize)]
pub(super) struct SavedReport {
    saved_at: DateTime<Utc>,
    digest: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CurrentReport {
    saved_at: DateTime<Utc>,
    digest: String,
    report: Value,
    query: Option<Value>,
}

fn parse_context(request_id: &str, raw: Option<&str>) -> Result<RenderContext, ApiError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "screen") => Ok(RenderContext::Screen),
        Some("print") => Ok(RenderContext::Print),
        Some(other) => Err(ApiError::new(
            request_id,
            "validation_error",
            format!("unknown render context '{other}'; expected screen or print"),
        )),
    }
}

fn parse_raw(request_id: &str, value: Value) -> Result<RawReport, ApiError> {
    RawReport::from_value(value)
        .map_err(|e| ApiError::new(request_id, "validation_error", e.to_string()))
}

fn json_body<T>(request_id: &str, payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::new(request_id, "bad_request", e.body_text()))
}

fn require_authenticated(request_id: &str, viewer: Viewer) -> Result<(), ApiError> {
    if viewer.authenticated {
        Ok(())
    } else {
        Err(ApiError::new(
            request_id,
            "unauthorized",
            "a valid bearer token is required",
        ))
    }
}

fn render(
    raw: &RawReport,
    viewer: Viewer,
    context: RenderContext,
    profile: &PresentationProfile,
) -> ReportView {
    let view = render_report(raw, viewer, context, profile);
    tracing::debug!(
        report_id = %view.report_id,
        authenticated = viewer.authenticated,
        ?context,
        sections = view.sections.len(),
        "rendered report view"
    );
    view
}

/// Render a posted raw payload without touching the store.
pub(super) async fn render_posted(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(viewer): Extension<Viewer>,
    Query(params): Query<RenderParams>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<ReportView>>, ApiError> {
    let context = parse_context(&req_id.0, params.context.as_deref())?;
    let raw = parse_raw(&req_id.0, json_body(&req_id.0, payload)?)?;

    Ok(Json(ApiResponse {
        data: render(&raw, viewer, context, &state.profile),
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Replace the current report (and its query). Navigation hands a fresh
/// payload over through this route.
pub(super) async fn put_current(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(viewer): Extension<Viewer>,
    payload: Result<Json<CurrentReportBody>, JsonRejection>,
) -> Result<Json<ApiResponse<SavedReport>>, ApiError> {
    require_authenticated(&req_id.0, viewer)?;
    let body = json_body(&req_id.0, payload)?;
    parse_raw(&req_id.0, body.report.clone())?;

    let stored = with_store(&state, &req_id.0, move |store| {
        ReportSession::resolve(Some(body.report), body.query, store)
    })
    .await?
    .into_report()
    .ok_or_else(|| ApiError::new(&*req_id.0, "internal_error", "report was not stored"))?;

    Ok(Json(ApiResponse {
        data: SavedReport {
            saved_at: stored.saved_at,
            digest: stored.digest,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

async fn load_current(
    state: &AppState,
    request_id: &str,
) -> Result<(StoredReport, Option<Value>), ApiError> {
    let current = with_store(state, request_id, |store| {
        let Some(stored) = ReportSession::resolve(None, None, store)?.into_report() else {
            return Ok(None);
        };
        let query = store.load_query().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored query unreadable");
            None
        });
        Ok(Some((stored, query)))
    })
    .await?;

    current.ok_or_else(|| {
        ApiError::new(
            request_id,
            "session_expired",
            "no current report; start a new evaluation",
        )
    })
}

/// The stored blob as saved. Restricted to authenticated viewers because it
/// bypasses section locking.
pub(super) async fn get_current(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Json<ApiResponse<CurrentReport>>, ApiError> {
    require_authenticated(&req_id.0, viewer)?;
    let (stored, query) = load_current(&state, &req_id.0).await?;

    Ok(Json(ApiResponse {
        data: CurrentReport {
            saved_at: stored.saved_at,
            digest: stored.digest,
            report: stored.report,
            query,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn view_current(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(viewer): Extension<Viewer>,
    Query(params): Query<RenderParams>,
) -> Result<Json<ApiResponse<ReportView>>, ApiError> {
    let context = parse_context(&req_id.0, params.context.as_deref())?;
    let (stored, _) = load_current(&state, &req_id.0).await?;
    let raw = parse_raw(&req_id.0, stored.report)?;

    Ok(Json(ApiResponse {
        data: render(&raw, viewer, context, &state.profile),
        meta: ResponseMeta::new(req_id.0),
    }))
}
