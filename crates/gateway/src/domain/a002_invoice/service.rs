use chrono::NaiveDate;
use contracts::domain::a002_invoice::{Invoice, InvoicePagination};

use super::{mapper, repository};
use crate::shared::erp::{ErpError, RawRecord, RecordSource};
use crate::shared::pagination::{paginate, PageWindow};
use crate::shared::references::{self, ReferenceKind, ReferenceLookup};

const REFERENCES: &[ReferenceKind] = &[
    ReferenceKind::Partner,
    ReferenceKind::Journal,
    ReferenceKind::Currency,
];

/// Страница счетов (кроме отменённых)
pub async fn list(
    source: &dyn RecordSource,
    page: i64,
    page_size: i64,
) -> Result<InvoicePagination, ErpError> {
    let window = paginate(page, page_size);
    let (total, raw) = repository::fetch_page(
        source,
        &repository::listing_criteria(),
        &window,
        repository::LIST_FIELDS,
    )
    .await?;

    let lookup = references::resolve(source, &raw, REFERENCES).await;
    let items = raw.iter().map(|r| mapper::to_invoice(r, &lookup)).collect();

    let meta = window.meta(total);
    Ok(InvoicePagination {
        items,
        page: meta.page,
        page_size: meta.page_size,
        total_items: meta.total_items,
        total_pages: meta.total_pages,
    })
}

pub async fn posted_page(
    source: &dyn RecordSource,
    window: &PageWindow,
) -> Result<(i64, Vec<Invoice>), ErpError> {
    let (total, raw) = repository::fetch_page(
        source,
        &repository::posted_criteria(),
        window,
        repository::SUMMARY_FIELDS,
    )
    .await?;
    Ok((total, to_invoices(&raw)))
}

pub async fn posted_between(
    source: &dyn RecordSource,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Invoice>, ErpError> {
    let raw = repository::fetch_all(
        source,
        &repository::posted_between_criteria(start, end),
        repository::SUMMARY_FIELDS,
    )
    .await?;
    Ok(to_invoices(&raw))
}

fn to_invoices(raw: &[RawRecord]) -> Vec<Invoice> {
    let lookup = ReferenceLookup::new();
    raw.iter().map(|r| mapper::to_invoice(r, &lookup)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::erp::mock::MockSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_pages_and_enriches() {
        let invoices = (1..=12)
            .map(|id| {
                json!({
                    "id": id,
                    "display_name": format!("INV/{:03}", id),
                    "partner_id": [100 + id % 2, "P"],
                    "journal_id": [1, "Sales"],
                    "currency_id": false,
                    "price_subtotal": 10.0,
                    "price_total": 12.0,
                    "state": "posted"
                })
            })
            .collect();

        let source = MockSource::new()
            .with_records(repository::MODEL, invoices)
            .with_records(
                "res.partner",
                vec![
                    json!({"id": 100, "name": "Even"}),
                    json!({"id": 101, "name": "Odd"}),
                ],
            )
            .with_records("account.journal", vec![json!({"id": 1, "name": "Customer Invoices"})]);

        let page = list(&source, 2, 5).await.unwrap();

        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<i64> = page.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.items[0].partner_name, "Even");
        assert_eq!(page.items[1].partner_name, "Odd");
        assert_eq!(page.items[0].journal_name, "Customer Invoices");
        assert!((page.items[0].amount_tax - 2.0).abs() < 1e-9);

        // Ни у одного счёта нет валюты
        assert!(source.calls_for("res.currency").is_empty());
        assert_eq!(source.calls_for("res.partner").len(), 1);
    }

    #[tokio::test]
    async fn test_posted_between_uses_search_read() {
        let source = MockSource::new().with_records(
            repository::MODEL,
            vec![json!({"id": 1, "display_name": "INV/1", "invoice_date": "2024-01-02", "price_total": 5.0})],
        );
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let invoices = posted_between(&source, start, end).await.unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].amount_total, 5.0);

        let calls = source.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "search_read");
        assert_eq!(calls[0].fields, vec!["id", "display_name", "invoice_date", "price_total"]);
    }
}
