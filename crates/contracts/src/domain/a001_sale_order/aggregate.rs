use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Заказ продажи (`sale.order` в ERP), обогащённый данными справочников
///
/// Поля справочников (партнёр, продавец, валюта) заполняются пустыми
/// значениями, если ссылки нет или справочник не удалось прочитать.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: i64,
    pub name: String,

    // Партнёр
    pub partner_id: i64,
    pub partner_name: String,
    pub partner_vat: String,
    pub partner_phone: String,
    pub partner_mobile: String,

    // Продавец (res.users)
    pub salesperson_id: i64,
    pub salesperson_name: String,

    pub currency_id: i64,
    pub currency_name: String,

    pub date_order: Option<NaiveDateTime>,
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub amount_total: f64,
    /// Статус из ERP: draft, sent, sale, done, cancel
    pub state: String,
}

/// Страница заказов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleOrderPagination {
    pub items: Vec<SaleOrder>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}
