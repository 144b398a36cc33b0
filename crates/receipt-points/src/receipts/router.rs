use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{Receipt, ReceiptId};
use super::registry::{ReceiptRegistry, RegistryError};
use super::service::{ReceiptPointsService, ReceiptServiceError};

/// Body returned after a receipt is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body returned for a points lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// Router builder exposing receipt intake and points lookup.
pub fn receipt_router<R>(service: Arc<ReceiptPointsService<R>>) -> Router
where
    R: ReceiptRegistry + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptPointsService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRegistry + 'static,
{
    let receipt = match payload {
        Ok(Json(receipt)) => receipt,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed receipt payload");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match service.submit(receipt) {
        Ok(id) => (StatusCode::OK, Json(ProcessReceiptResponse { id })).into_response(),
        Err(ReceiptServiceError::Validation(err)) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(other) => {
            error!(error = %other, "failed to store receipt");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptPointsService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRegistry + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.points(&id) {
        Ok(breakdown) => (
            StatusCode::OK,
            Json(PointsResponse {
                points: breakdown.total,
            }),
        )
            .into_response(),
        Err(ReceiptServiceError::Registry(RegistryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, "receipt does not exist")
        }
        Err(other) => {
            error!(receipt_id = %id, error = %other, "failed to score receipt");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
