use tracing::{debug, warn};

use backend_domain::{PointsBreakdown, ReceiptId};

use crate::dtos::PointsResponse;
use crate::{AppError, AppState};

pub async fn get_points(state: &AppState, id: &str) -> Result<PointsResponse, AppError> {
    state.metrics.record_points_lookup();
    let Some(processed) = state.receipt_repo.find_by_id(id).await else {
        state.metrics.record_not_found();
        warn!("points requested for unknown receipt {}", id);
        return Err(AppError::NotFound(ReceiptId::from(id)));
    };
    let breakdown = PointsBreakdown::for_receipt(&processed.receipt);
    debug!("points for receipt {}: {:?}", processed.id, breakdown);
    Ok(PointsResponse {
        points: breakdown.total(),
    })
}
