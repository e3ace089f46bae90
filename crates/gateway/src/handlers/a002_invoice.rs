use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a002_invoice::InvoicePagination;
use contracts::shared::pagination::PageQuery;

use crate::domain::a002_invoice;
use crate::routes::AppState;
use crate::shared::api_error::ApiError;

/// GET /invoices
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<InvoicePagination>, ApiError> {
    let page = a002_invoice::service::list(
        state.source.as_ref(),
        query.page_or_default(),
        query.page_size_or_default(),
    )
    .await?;
    Ok(Json(page))
}
