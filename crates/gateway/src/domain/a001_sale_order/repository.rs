use chrono::NaiveDate;

use crate::shared::erp::{Criteria, ErpError, Operator, RawRecord, RecordSource, SearchOptions};
use crate::shared::pagination::{self, PageWindow};

pub const MODEL: &str = "sale.order";

/// Стабильный порядок страниц между вызовами
pub const ORDER: &str = "date_order desc, id desc";

pub const LIST_FIELDS: &[&str] = &[
    "id",
    "name",
    "partner_id",
    "user_id",
    "currency_id",
    "date_order",
    "amount_untaxed",
    "amount_tax",
    "amount_total",
    "state",
];

pub const SUMMARY_FIELDS: &[&str] = &["id", "name", "date_order", "amount_total"];

/// Все заказы, кроме отменённых
pub fn listing_criteria() -> Criteria {
    Criteria::new().add("state", Operator::Ne, "cancel")
}

/// Подтверждённые заказы
pub fn confirmed_criteria() -> Criteria {
    Criteria::new().add("state", Operator::Eq, "sale")
}

/// Подтверждённые заказы с датой в [start 00:00:00, end 23:59:59]
pub fn confirmed_between_criteria(start: NaiveDate, end: NaiveDate) -> Criteria {
    confirmed_criteria()
        .add(
            "date_order",
            Operator::Ge,
            format!("{} 00:00:00", start.format("%Y-%m-%d")),
        )
        .add(
            "date_order",
            Operator::Le,
            format!("{} 23:59:59", end.format("%Y-%m-%d")),
        )
}

pub async fn fetch_page(
    source: &dyn RecordSource,
    criteria: &Criteria,
    window: &PageWindow,
    fields: &[&str],
) -> Result<(i64, Vec<RawRecord>), ErpError> {
    pagination::fetch_page(source, MODEL, criteria, window, ORDER, fields).await
}

/// Все подходящие заказы одним search_read, без пагинации
pub async fn fetch_all(
    source: &dyn RecordSource,
    criteria: &Criteria,
    fields: &[&str],
) -> Result<Vec<RawRecord>, ErpError> {
    let options = SearchOptions::new().fields(fields).order(ORDER);
    source.search_read(MODEL, criteria, &options).await
}
