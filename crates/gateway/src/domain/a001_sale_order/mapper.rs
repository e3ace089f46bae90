use chrono::NaiveDateTime;
use contracts::dashboards::d400_sales_summary::SaleOrderSummary;
use contracts::domain::a001_sale_order::SaleOrder;

use crate::shared::daily_aggregator::DailyEntry;
use crate::shared::erp::RawRecord;
use crate::shared::references::{ReferenceKind, ReferenceLookup};

/// Сырой `sale.order` + справочники → SaleOrder.
/// Отсутствующие значения становятся пустыми строками и нулями.
pub fn to_sale_order(raw: &RawRecord, lookup: &ReferenceLookup) -> SaleOrder {
    let partner_id = raw.many2one("partner_id");
    let salesperson_id = raw.many2one("user_id");
    let currency_id = raw.many2one("currency_id");

    let partner = lookup.attrs_or_default(ReferenceKind::Partner, partner_id);
    let salesperson = lookup.attrs_or_default(ReferenceKind::Salesperson, salesperson_id);
    let currency = lookup.attrs_or_default(ReferenceKind::Currency, currency_id);

    SaleOrder {
        id: raw.id(),
        name: raw.string("name").unwrap_or_default(),
        partner_id: partner_id.unwrap_or_default(),
        partner_name: partner.name,
        partner_vat: partner.vat,
        partner_phone: partner.phone,
        partner_mobile: partner.mobile,
        salesperson_id: salesperson_id.unwrap_or_default(),
        salesperson_name: salesperson.name,
        currency_id: currency_id.unwrap_or_default(),
        currency_name: currency.name,
        date_order: raw.datetime("date_order"),
        amount_untaxed: raw.float("amount_untaxed").unwrap_or_default(),
        amount_tax: raw.float("amount_tax").unwrap_or_default(),
        amount_total: raw.float("amount_total").unwrap_or_default(),
        state: raw.string("state").unwrap_or_default(),
    }
}

pub fn to_summary(order: &SaleOrder, order_number: u32) -> SaleOrderSummary {
    SaleOrderSummary {
        order_number,
        order_id: order.id,
        order_name: order.name.clone(),
        amount_total: order.amount_total,
        date_order: order.date_order,
    }
}

impl DailyEntry for SaleOrder {
    fn entry_date(&self) -> Option<NaiveDateTime> {
        self.date_order
    }

    fn entry_amount(&self) -> f64 {
        self.amount_total
    }
}
