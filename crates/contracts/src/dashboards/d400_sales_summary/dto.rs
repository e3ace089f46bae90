use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::period::DateRange;

/// Подтверждённый заказ внутри дня
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleOrderSummary {
    /// Номер заказа внутри дня (с 1, в порядке просмотра страницы)
    pub order_number: u32,
    pub order_id: i64,
    pub order_name: String,
    pub amount_total: f64,
    pub date_order: Option<NaiveDateTime>,
}

/// Подтверждённые заказы одного календарного дня
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesSummary {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub order_count: u32,
    pub orders: Vec<SaleOrderSummary>,
}

/// Сводка по дням, постранично (GET /sales/daily-summary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummaryResponse {
    /// Дни по убыванию даты
    pub items: Vec<DailySalesSummary>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// Сводка за период (GET /sales/period-summary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSalesSummaryResponse {
    /// Подпись периода, например "Last 30 Days" или "January 2025"
    pub period: String,
    /// Запрошенный код периода ("30D", "MONTHLY", ...) или "CUSTOM"
    pub period_type: String,
    pub date_range: DateRange,
    pub items: Vec<DailySalesSummary>,
    pub total_amount: f64,
    pub order_count: u32,
    pub average_daily: f64,
}
