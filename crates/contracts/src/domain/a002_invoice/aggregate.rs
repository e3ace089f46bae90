use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Счёт (строка отчёта `account.invoice.report` в ERP)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub name: String,

    // Партнёр
    pub partner_id: i64,
    pub partner_name: String,
    pub partner_vat: String,
    pub partner_phone: String,
    pub partner_mobile: String,

    pub date_invoice: Option<NaiveDateTime>,
    pub date_due: Option<NaiveDateTime>,

    // Суммы
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub amount_total: f64,
    pub amount_residual: f64,

    /// draft, posted, cancel
    pub state: String,
    /// out_invoice, in_invoice, out_refund, ...
    pub move_type: String,

    pub journal_id: i64,
    pub journal_name: String,
    pub currency_id: i64,
    pub currency_name: String,
}

/// Страница счетов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePagination {
    pub items: Vec<Invoice>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}
