pub mod dto;

pub use dto::{
    DailyInvoiceSummary, InvoiceSummary, InvoiceSummaryResponse, PeriodInvoiceSummaryResponse,
};
