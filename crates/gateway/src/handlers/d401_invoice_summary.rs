use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use contracts::dashboards::d401_invoice_summary::{
    InvoiceSummaryResponse, PeriodInvoiceSummaryResponse,
};
use contracts::shared::pagination::PageQuery;
use contracts::shared::period::PeriodSummaryQuery;

use crate::dashboards::d401_invoice_summary::service;
use crate::routes::AppState;
use crate::shared::api_error::ApiError;
use crate::shared::period::PeriodRequest;

/// GET /invoices/daily-summary
pub async fn daily_summary(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<InvoiceSummaryResponse>, ApiError> {
    let summary = service::daily_summary(
        state.source.as_ref(),
        query.page_or_default(),
        query.page_size_or_default(),
    )
    .await?;
    Ok(Json(summary))
}

/// GET /invoices/period-summary
pub async fn period_summary(
    State(state): State<AppState>,
    Query(query): Query<PeriodSummaryQuery>,
) -> Result<Json<PeriodInvoiceSummaryResponse>, ApiError> {
    let request = PeriodRequest::from_query(&query)?;
    let summary =
        service::period_summary(state.source.as_ref(), &request, Utc::now().naive_utc()).await?;
    Ok(Json(summary))
}
