use chrono::NaiveDate;
use contracts::domain::a001_sale_order::{SaleOrder, SaleOrderPagination};

use super::{mapper, repository};
use crate::shared::erp::{ErpError, RawRecord, RecordSource};
use crate::shared::pagination::{paginate, PageWindow};
use crate::shared::references::{self, ReferenceKind, ReferenceLookup};

const REFERENCES: &[ReferenceKind] = &[
    ReferenceKind::Partner,
    ReferenceKind::Salesperson,
    ReferenceKind::Currency,
];

/// Страница заказов (кроме отменённых) с данными партнёра, продавца и валюты
pub async fn list(
    source: &dyn RecordSource,
    page: i64,
    page_size: i64,
) -> Result<SaleOrderPagination, ErpError> {
    let window = paginate(page, page_size);
    let (total, raw) = repository::fetch_page(
        source,
        &repository::listing_criteria(),
        &window,
        repository::LIST_FIELDS,
    )
    .await?;

    let lookup = references::resolve(source, &raw, REFERENCES).await;
    let items = raw
        .iter()
        .map(|r| mapper::to_sale_order(r, &lookup))
        .collect();

    let meta = window.meta(total);
    Ok(SaleOrderPagination {
        items,
        page: meta.page,
        page_size: meta.page_size,
        total_items: meta.total_items,
        total_pages: meta.total_pages,
    })
}

/// Страница подтверждённых заказов, без справочников
pub async fn confirmed_page(
    source: &dyn RecordSource,
    window: &PageWindow,
) -> Result<(i64, Vec<SaleOrder>), ErpError> {
    let (total, raw) = repository::fetch_page(
        source,
        &repository::confirmed_criteria(),
        window,
        repository::SUMMARY_FIELDS,
    )
    .await?;
    Ok((total, to_orders(&raw)))
}

/// Все подтверждённые заказы за дни [start, end] включительно
pub async fn confirmed_between(
    source: &dyn RecordSource,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<SaleOrder>, ErpError> {
    let raw = repository::fetch_all(
        source,
        &repository::confirmed_between_criteria(start, end),
        repository::SUMMARY_FIELDS,
    )
    .await?;
    Ok(to_orders(&raw))
}

fn to_orders(raw: &[RawRecord]) -> Vec<SaleOrder> {
    let lookup = ReferenceLookup::new();
    raw.iter().map(|r| mapper::to_sale_order(r, &lookup)).collect()
}
