use chrono::NaiveDate;

use crate::shared::erp::{Criteria, ErpError, Operator, RawRecord, RecordSource, SearchOptions};
use crate::shared::pagination::{self, PageWindow};

/// Отчётная модель счетов: одна строка на документ с итогами
pub const MODEL: &str = "account.invoice.report";

pub const ORDER: &str = "invoice_date desc, id desc";

pub const LIST_FIELDS: &[&str] = &[
    "id",
    "display_name",
    "partner_id",
    "journal_id",
    "currency_id",
    "invoice_date",
    "invoice_date_due",
    "price_subtotal",
    "price_total",
    "amount_residual",
    "state",
    "move_type",
];

pub const SUMMARY_FIELDS: &[&str] = &["id", "display_name", "invoice_date", "price_total"];

pub fn listing_criteria() -> Criteria {
    Criteria::new().add("state", Operator::Ne, "cancel")
}

/// Проведённые счета
pub fn posted_criteria() -> Criteria {
    Criteria::new().add("state", Operator::Eq, "posted")
}

/// invoice_date хранится без времени, границы включительно
pub fn posted_between_criteria(start: NaiveDate, end: NaiveDate) -> Criteria {
    posted_criteria()
        .add("invoice_date", Operator::Ge, start.format("%Y-%m-%d").to_string())
        .add("invoice_date", Operator::Le, end.format("%Y-%m-%d").to_string())
}

pub async fn fetch_page(
    source: &dyn RecordSource,
    criteria: &Criteria,
    window: &PageWindow,
    fields: &[&str],
) -> Result<(i64, Vec<RawRecord>), ErpError> {
    pagination::fetch_page(source, MODEL, criteria, window, ORDER, fields).await
}

pub async fn fetch_all(
    source: &dyn RecordSource,
    criteria: &Criteria,
    fields: &[&str],
) -> Result<Vec<RawRecord>, ErpError> {
    let options = SearchOptions::new().fields(fields).order(ORDER);
    source.search_read(MODEL, criteria, &options).await
}
