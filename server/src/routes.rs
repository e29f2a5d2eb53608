use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use lexp_providers::{criteria::FilterField, dispatch};

use crate::{
    error::AppError,
    gate::{DashboardAction, GateDecision, UpsellPrompt, check_action},
    session::{Session, resolve_session, sign_out},
    state::AppState,
    utils::sanitize_filter,
    workflow::SearchWorkflow,
};

// Navigation targets, opaque to this service.
pub const LOGIN_ROUTE: &str = "login";
pub const DASHBOARD_ROUTE: &str = "dashboard";
pub const CONTACT_ROUTE: &str = "contact";

async fn guard(state: &AppState, headers: &HeaderMap) -> Result<Session, AppError> {
    resolve_session(&state.http, &state.config.auth_url, headers).await
}

fn upsell_response() -> Response {
    Json(json!({ "allowed": false, "upsell": UpsellPrompt::current() })).into_response()
}

fn gate_response(action: DashboardAction) -> Response {
    match check_action(action) {
        GateDecision::Allowed => Json(json!({ "allowed": true })).into_response(),
        GateDecision::RequiresUpgrade => upsell_response(),
    }
}

pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = guard(&state, &headers).await?;

    Ok(Json(json!({
        "userId": session.user_id,
        "email": session.email,
        "redirect": DASHBOARD_ROUTE,
    })))
}

pub async fn signout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    sign_out(&state.http, &state.config.auth_url, &headers).await;

    Json(json!({ "redirect": LOGIN_ROUTE }))
}

pub async fn filters_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = guard(&state, &headers).await?;

    let workflows = state.workflows.lock().await;
    let criteria = workflows
        .get(&session.user_id)
        .map(|workflow| workflow.criteria().clone())
        .unwrap_or_default();

    Ok(Json(criteria))
}

#[derive(Deserialize)]
pub struct FilterEdit {
    pub field: FilterField,
    pub value: String,
}

pub async fn edit_filter_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(edit): Json<FilterEdit>,
) -> Result<impl IntoResponse, AppError> {
    let session = guard(&state, &headers).await?;
    let value = sanitize_filter(&edit.value);

    let mut workflows = state.workflows.lock().await;
    let workflow = workflows.entry(session.user_id).or_default();
    let criteria = workflow.edit_filter(edit.field, &value)?;

    Ok(Json(criteria.clone()))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = guard(&state, &headers).await?;

    // Snapshot criteria and sequence number, then dispatch without holding
    // the workflow lock across the remote call.
    let (seq, criteria) = {
        let mut workflows = state.workflows.lock().await;
        let workflow = workflows.entry(session.user_id.clone()).or_default();

        if !workflow.criteria().has_required() {
            return Err(AppError::MissingCriteria);
        }

        if !state.limit_policy.allow_search(&session.user_id) {
            // Never taken under the unlimited policy; a metered plan
            // answers with the upsell prompt instead of searching.
            return Ok(upsell_response());
        }

        workflow.begin_search().ok_or(AppError::MissingCriteria)?
    };

    info!(
        "Dispatching {} search for {}",
        criteria.platform, session.user_id
    );

    let outcome = match dispatch(
        &state.http,
        &state.config.search_endpoints,
        &state.config.search_key,
        &criteria,
    )
    .await
    {
        Ok(result) => Some(result),
        Err(e) => {
            // Surfaced as the zero-result state, not a distinct error.
            warn!("Profile search failed: {e}");
            None
        }
    };

    let mut workflows = state.workflows.lock().await;
    let workflow = workflows.entry(session.user_id).or_default();
    workflow.apply_outcome(seq, outcome);

    Ok(Json(workflow.results_view()).into_response())
}

pub async fn results_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = guard(&state, &headers).await?;

    let workflows = state.workflows.lock().await;
    let view = workflows
        .get(&session.user_id)
        .map(SearchWorkflow::results_view)
        .unwrap_or_else(|| SearchWorkflow::new().results_view());

    Ok(Json(view))
}

pub async fn limits_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session = guard(&state, &headers).await?;

    Ok(Json(json!({
        "remainingSearches": state.limit_policy.remaining(&session.user_id),
        // Always true until a paid tier exists.
        "hasSubscription": true,
    })))
}

pub async fn show_more_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    guard(&state, &headers).await?;

    Ok(gate_response(DashboardAction::ShowMore))
}

pub async fn export_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    guard(&state, &headers).await?;

    Ok(gate_response(DashboardAction::Export))
}

#[derive(Deserialize)]
pub struct OpenProfile {
    pub position: usize,
}

pub async fn open_profile_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<OpenProfile>,
) -> Result<Response, AppError> {
    let session = guard(&state, &headers).await?;

    let workflows = state.workflows.lock().await;
    let workflow = workflows
        .get(&session.user_id)
        .ok_or(AppError::NoSuchProfile)?;

    match check_action(DashboardAction::OpenRestrictedProfile(workflow.platform())) {
        GateDecision::RequiresUpgrade => Ok(upsell_response()),
        GateDecision::Allowed => {
            let profile = workflow
                .visible_profile(request.position)
                .ok_or(AppError::NoSuchProfile)?;

            Ok(Json(json!({ "allowed": true, "url": profile.link })).into_response())
        }
    }
}
