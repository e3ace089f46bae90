use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a001_sale_order::SaleOrderPagination;
use contracts::shared::pagination::PageQuery;

use crate::domain::a001_sale_order;
use crate::routes::AppState;
use crate::shared::api_error::ApiError;

/// GET /sales
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<SaleOrderPagination>, ApiError> {
    let page = a001_sale_order::service::list(
        state.source.as_ref(),
        query.page_or_default(),
        query.page_size_or_default(),
    )
    .await?;
    Ok(Json(page))
}
