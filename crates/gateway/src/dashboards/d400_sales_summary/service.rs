use chrono::NaiveDateTime;
use contracts::dashboards::d400_sales_summary::{
    DailySalesSummary, PeriodSalesSummaryResponse, SaleOrderSummary, SalesSummaryResponse,
};
use contracts::domain::a001_sale_order::SaleOrder;

use crate::domain::a001_sale_order::{mapper, service as sale_orders};
use crate::shared::daily_aggregator::{self, DailyBucket};
use crate::shared::erp::{ErpError, RecordSource};
use crate::shared::pagination::paginate;
use crate::shared::period::PeriodRequest;

/// Подтверждённые заказы одной страницы, разложенные по дням
pub async fn daily_summary(
    source: &dyn RecordSource,
    page: i64,
    page_size: i64,
) -> Result<SalesSummaryResponse, ErpError> {
    let window = paginate(page, page_size);
    let (total, orders) = sale_orders::confirmed_page(source, &window).await?;
    let meta = window.meta(total);

    Ok(SalesSummaryResponse {
        items: by_day(&orders),
        page: meta.page,
        page_size: meta.page_size,
        total_items: meta.total_items,
        total_pages: meta.total_pages,
    })
}

/// Сводка подтверждённых заказов за период
pub async fn period_summary(
    source: &dyn RecordSource,
    request: &PeriodRequest,
    now: NaiveDateTime,
) -> Result<PeriodSalesSummaryResponse, ErpError> {
    let period = request.resolve(now);
    let orders =
        sale_orders::confirmed_between(source, period.start.date(), period.end.date()).await?;

    let buckets = daily_aggregator::aggregate(&orders, mapper::to_summary);
    let (total_amount, order_count) = daily_aggregator::totals(&buckets);
    let items: Vec<DailySalesSummary> = buckets.into_iter().map(into_daily).collect();

    tracing::info!(
        "Sales period summary '{}': {} orders in {} days, total {:.2}",
        period.label,
        order_count,
        items.len(),
        total_amount
    );

    Ok(PeriodSalesSummaryResponse {
        period: period.label.clone(),
        period_type: request.period_code.clone(),
        date_range: period.date_range(),
        items,
        total_amount,
        order_count,
        average_daily: period.average_daily(total_amount),
    })
}

fn by_day(orders: &[SaleOrder]) -> Vec<DailySalesSummary> {
    daily_aggregator::aggregate(orders, mapper::to_summary)
        .into_iter()
        .map(into_daily)
        .collect()
}

fn into_daily(bucket: DailyBucket<SaleOrderSummary>) -> DailySalesSummary {
    DailySalesSummary {
        date: bucket.date,
        total_amount: bucket.total_amount,
        order_count: bucket.count,
        orders: bucket.items,
    }
}
