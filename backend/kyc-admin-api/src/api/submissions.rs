use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{KycStatus, KycSubmissionDetail, KycSubmissionSummary};
use crate::services::KycService;
use crate::AppState;

/// Notification shown to the courier once their verification is approved.
const APPROVAL_TITLE: &str = "KYC approuvé";
const APPROVAL_BODY: &str = "Votre vérification KYC a été approuvée 🎉";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_submissions))
        .route("/:id", get(get_submission))
        .route("/:id/approve", post(approve_submission))
}

#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub status: Option<String>,
}

async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<ListSubmissionsQuery>,
) -> Result<Json<Vec<KycSubmissionSummary>>> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            KycStatus::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status: {}", raw)))?,
        ),
        None => None,
    };

    let service = KycService::new(state.db.clone());
    let submissions = service.list_submissions(status).await?;

    Ok(Json(submissions))
}

async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<KycSubmissionDetail>> {
    let service = KycService::new(state.db.clone());
    let submission = service.get_submission(id).await?;

    Ok(Json(submission))
}

#[derive(Debug, Serialize)]
pub struct ApproveResponse {
    pub ok: bool,
}

async fn approve_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApproveResponse>> {
    let service = KycService::new(state.db.clone());
    let user_id = service.approve_submission(id, None).await?;

    // Best-effort: the approval stands whatever happens to the push.
    let data = HashMap::from([("type".to_string(), "kyc_approved".to_string())]);
    state
        .push
        .notify_user(user_id, APPROVAL_TITLE, APPROVAL_BODY, data)
        .await;

    Ok(Json(ApproveResponse { ok: true }))
}
