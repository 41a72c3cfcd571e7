use api::{endpoints::EXPORT_FILENAME, AdminData, SubmissionRecord, SubmitAck};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    aggregate::{aggregate, summaries},
    error::AppError,
    export::to_csv,
    records::build_record,
    state::AppState,
};

/// Accepts any content type; the body only has to be a JSON object.
pub async fn submit_survey_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitAck>, AppError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|err| AppError::MalformedPayload(err.to_string()))?;
    let record = build_record(&payload, state.schema)?;

    let stored = state.store.insert(record).await?;
    info!("Stored survey response {:?}", stored.id());

    Ok(Json(SubmitAck { success: true }))
}

pub async fn admin_data_handler(State(state): State<AppState>) -> Result<Json<AdminData>, AppError> {
    let rows = state.store.all().await?;
    Ok(Json(AdminData {
        aggregates: aggregate(&rows, state.schema),
        submissions: summaries(&rows),
    }))
}

/// Ids that are not integers are treated as unknown.
pub async fn admin_response_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SubmissionRecord>, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::NotFound)?;
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

pub async fn admin_export_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.all().await?;
    info!("Exporting {} responses", rows.len());

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={EXPORT_FILENAME}"),
        ),
    ];
    Ok((headers, to_csv(&rows)))
}
