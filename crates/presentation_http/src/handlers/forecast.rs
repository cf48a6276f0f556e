//! Forecast lookup handler

use application::ApplicationError;
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Query string for `GET /api/forecast`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ForecastQuery {
    /// Free-form street address; absent and blank are both rejected
    #[serde(default)]
    pub address: Option<String>,
}

/// Look up the seven-day forecast for a street address
///
/// The request owns a cancellation token guarded by a `DropGuard`: when the
/// client disconnects and the handler future is dropped, any outbound call
/// still in flight is cancelled. Server shutdown does not cancel; graceful
/// drain lets in-flight requests finish.
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Response {
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    match state
        .forecast_service
        .forecast_for_address(query.address.as_deref(), &cancel)
        .await
    {
        Ok(forecasts) => Json(forecasts).into_response(),
        Err(ApplicationError::Cancelled) => {
            // Cancellation has no HTTP status; the request never completes.
            debug!("Forecast request cancelled");
            std::future::pending().await
        },
        Err(e) => ApiError::from(e).into_response(),
    }
}
