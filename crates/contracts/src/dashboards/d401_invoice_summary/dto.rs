use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::period::DateRange;

/// Проведённый счёт внутри дня
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub invoice_number: u32,
    pub invoice_id: i64,
    pub invoice_name: String,
    pub amount_total: f64,
    pub date_invoice: Option<NaiveDateTime>,
}

/// Проведённые счета одного календарного дня
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInvoiceSummary {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub invoice_count: u32,
    pub invoices: Vec<InvoiceSummary>,
}

/// Сводка по дням, постранично (GET /invoices/daily-summary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSummaryResponse {
    pub items: Vec<DailyInvoiceSummary>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// Сводка за период (GET /invoices/period-summary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodInvoiceSummaryResponse {
    pub period: String,
    pub period_type: String,
    pub date_range: DateRange,
    pub items: Vec<DailyInvoiceSummary>,
    pub total_amount: f64,
    pub invoice_count: u32,
    pub average_daily: f64,
}
