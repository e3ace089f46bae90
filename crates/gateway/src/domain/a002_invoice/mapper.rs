use chrono::NaiveDateTime;
use contracts::dashboards::d401_invoice_summary::InvoiceSummary;
use contracts::domain::a002_invoice::Invoice;

use crate::shared::daily_aggregator::DailyEntry;
use crate::shared::erp::RawRecord;
use crate::shared::references::{ReferenceKind, ReferenceLookup};

/// Строка `account.invoice.report` + справочники → Invoice
///
/// Суммы: без налога = price_subtotal, всего = price_total,
/// налог = разница между ними.
pub fn to_invoice(raw: &RawRecord, lookup: &ReferenceLookup) -> Invoice {
    let partner_id = raw.many2one("partner_id");
    let journal_id = raw.many2one("journal_id");
    let currency_id = raw.many2one("currency_id");

    let partner = lookup.attrs_or_default(ReferenceKind::Partner, partner_id);
    let journal = lookup.attrs_or_default(ReferenceKind::Journal, journal_id);
    let currency = lookup.attrs_or_default(ReferenceKind::Currency, currency_id);

    let amount_untaxed = raw.float("price_subtotal").unwrap_or_default();
    let amount_total = raw.float("price_total").unwrap_or_default();

    Invoice {
        id: raw.id(),
        name: raw.string("display_name").unwrap_or_default(),
        partner_id: partner_id.unwrap_or_default(),
        partner_name: partner.name,
        partner_vat: partner.vat,
        partner_phone: partner.phone,
        partner_mobile: partner.mobile,
        date_invoice: raw.datetime("invoice_date"),
        date_due: raw.datetime("invoice_date_due"),
        amount_untaxed,
        amount_tax: amount_total - amount_untaxed,
        amount_total,
        amount_residual: raw.float("amount_residual").unwrap_or_default(),
        state: raw.string("state").unwrap_or_default(),
        move_type: raw.string("move_type").unwrap_or_default(),
        journal_id: journal_id.unwrap_or_default(),
        journal_name: journal.name,
        currency_id: currency_id.unwrap_or_default(),
        currency_name: currency.name,
    }
}

pub fn to_summary(invoice: &Invoice, invoice_number: u32) -> InvoiceSummary {
    InvoiceSummary {
        invoice_number,
        invoice_id: invoice.id,
        invoice_name: invoice.name.clone(),
        amount_total: invoice.amount_total,
        date_invoice: invoice.date_invoice,
    }
}

impl DailyEntry for Invoice {
    fn entry_date(&self) -> Option<NaiveDateTime> {
        self.date_invoice
    }

    fn entry_amount(&self) -> f64 {
        self.amount_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::references::ReferenceAttrs;
    use serde_json::json;

    #[test]
    fn test_amounts_and_references() {
        let mut lookup = ReferenceLookup::new();
        lookup.insert(
            ReferenceKind::Journal,
            1,
            ReferenceAttrs {
                name: "Customer Invoices".into(),
                ..Default::default()
            },
        );
        lookup.insert(
            ReferenceKind::Currency,
            2,
            ReferenceAttrs {
                name: "USD".into(),
                ..Default::default()
            },
        );

        let raw: RawRecord = serde_json::from_value(json!({
            "id": 9,
            "display_name": "INV/2024/00009",
            "partner_id": [14, "Ready Mat"],
            "journal_id": [1, "Customer Invoices"],
            "currency_id": [2, "USD"],
            "invoice_date": "2024-03-05",
            "invoice_date_due": false,
            "price_subtotal": 200.0,
            "price_total": 230.0,
            "amount_residual": 30.0,
            "state": "posted",
            "move_type": "out_invoice"
        }))
        .unwrap();

        let invoice = to_invoice(&raw, &lookup);

        assert_eq!(invoice.name, "INV/2024/00009");
        assert_eq!(invoice.amount_untaxed, 200.0);
        assert_eq!(invoice.amount_tax, 30.0);
        assert_eq!(invoice.amount_total, 230.0);
        assert_eq!(invoice.amount_residual, 30.0);
        assert_eq!(invoice.journal_name, "Customer Invoices");
        assert_eq!(invoice.currency_name, "USD");
        // Партнёр не разрешён
        assert_eq!(invoice.partner_id, 14);
        assert_eq!(invoice.partner_name, "");
        assert_eq!(invoice.date_invoice.unwrap().to_string(), "2024-03-05 00:00:00");
        assert_eq!(invoice.date_due, None);
        assert_eq!(invoice.move_type, "out_invoice");
    }
}
