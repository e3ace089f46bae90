use chrono::NaiveDateTime;
use contracts::dashboards::d401_invoice_summary::{
    DailyInvoiceSummary, InvoiceSummary, InvoiceSummaryResponse, PeriodInvoiceSummaryResponse,
};

use crate::domain::a002_invoice::{mapper, service as invoices};
use crate::shared::daily_aggregator::{self, DailyBucket};
use crate::shared::erp::{ErpError, RecordSource};
use crate::shared::pagination::paginate;
use crate::shared::period::PeriodRequest;

/// Проведённые счета одной страницы по дням
pub async fn daily_summary(
    source: &dyn RecordSource,
    page: i64,
    page_size: i64,
) -> Result<InvoiceSummaryResponse, ErpError> {
    let window = paginate(page, page_size);
    let (total, posted) = invoices::posted_page(source, &window).await?;
    let meta = window.meta(total);

    let items = daily_aggregator::aggregate(&posted, mapper::to_summary)
        .into_iter()
        .map(into_daily)
        .collect();

    Ok(InvoiceSummaryResponse {
        items,
        page: meta.page,
        page_size: meta.page_size,
        total_items: meta.total_items,
        total_pages: meta.total_pages,
    })
}

pub async fn period_summary(
    source: &dyn RecordSource,
    request: &PeriodRequest,
    now: NaiveDateTime,
) -> Result<PeriodInvoiceSummaryResponse, ErpError> {
    let period = request.resolve(now);
    let posted = invoices::posted_between(source, period.start.date(), period.end.date()).await?;

    let buckets = daily_aggregator::aggregate(&posted, mapper::to_summary);
    let (total_amount, invoice_count) = daily_aggregator::totals(&buckets);
    let items: Vec<DailyInvoiceSummary> = buckets.into_iter().map(into_daily).collect();

    tracing::info!(
        "Invoice period summary '{}': {} invoices in {} days, total {:.2}",
        period.label,
        invoice_count,
        items.len(),
        total_amount
    );

    Ok(PeriodInvoiceSummaryResponse {
        period: period.label.clone(),
        period_type: request.period_code.clone(),
        date_range: period.date_range(),
        items,
        total_amount,
        invoice_count,
        average_daily: period.average_daily(total_amount),
    })
}

fn into_daily(bucket: DailyBucket<InvoiceSummary>) -> DailyInvoiceSummary {
    DailyInvoiceSummary {
        date: bucket.date,
        total_amount: bucket.total_amount,
        invoice_count: bucket.count,
        invoices: bucket.items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_invoice::repository;
    use crate::shared::erp::mock::MockSource;
    use crate::shared::erp::Operator;
    use chrono::{Duration, NaiveDate};
    use contracts::shared::period::PeriodSummaryQuery;
    use serde_json::json;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[tokio::test]
    async fn test_daily_summary_sorted_descending() {
        let source = MockSource::new().with_records(
            repository::MODEL,
            vec![
                json!({"id": 1, "display_name": "INV/1", "invoice_date": "2024-03-01", "price_total": 100.0}),
                json!({"id": 2, "display_name": "INV/2", "invoice_date": "2024-03-03", "price_total": 50.0}),
                json!({"id": 3, "display_name": "INV/3", "invoice_date": "2024-03-01", "price_total": 25.5}),
                json!({"id": 4, "display_name": "INV/4", "invoice_date": false, "price_total": 1.0}),
            ],
        );

        let summary = daily_summary(&source, 1, 500).await.unwrap();

        let dates: Vec<String> = summary.items.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-03", "2024-03-01", "1970-01-01"]);
        assert_eq!(summary.items[1].invoice_count, 2);
        assert_eq!(summary.items[1].total_amount, 125.5);
        assert_eq!(summary.items[1].invoices[1].invoice_name, "INV/3");
        assert_eq!(summary.items[1].invoices[1].invoice_number, 2);
        assert_eq!(summary.items[2].invoices[0].date_invoice, None);

        let count = &source.calls_for(repository::MODEL)[0];
        assert_eq!(
            count.criteria.as_ref().unwrap().value_of("state", Operator::Eq),
            Some(&json!("posted"))
        );
    }

    #[tokio::test]
    async fn test_period_summary_last_7_days() {
        let now = at("2024-03-10 15:00:00");
        let source = MockSource::new().with_records(
            repository::MODEL,
            vec![
                json!({"id": 1, "display_name": "INV/1", "invoice_date": "2024-03-09", "price_total": 70.0}),
                json!({"id": 2, "display_name": "INV/2", "invoice_date": "2024-03-04", "price_total": 70.0}),
            ],
        );
        let request = PeriodRequest::from_query(&PeriodSummaryQuery {
            period_type: Some("7D".into()),
            ..Default::default()
        })
        .unwrap();

        let summary = period_summary(&source, &request, now).await.unwrap();

        assert_eq!(summary.period, "Last 7 Days");
        assert_eq!(summary.period_type, "7D");
        assert_eq!(summary.date_range.end_date, now);
        assert_eq!(summary.date_range.start_date, now - Duration::days(7));
        assert_eq!(summary.invoice_count, 2);
        assert_eq!(summary.total_amount, 140.0);
        assert!((summary.average_daily - 20.0).abs() < 1e-9);

        let criteria = source.calls()[0].criteria.clone().unwrap();
        assert_eq!(criteria.value_of("invoice_date", Operator::Ge), Some(&json!("2024-03-03")));
        assert_eq!(criteria.value_of("invoice_date", Operator::Le), Some(&json!("2024-03-10")));
        assert_eq!(
            summary.items[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[tokio::test]
    async fn test_period_summary_upstream_failure() {
        let source = MockSource::new().failing(repository::MODEL);
        let request = PeriodRequest::from_query(&PeriodSummaryQuery::default()).unwrap();
        assert!(period_summary(&source, &request, at("2024-03-10 15:00:00")).await.is_err());
    }
}
