pub mod dto;

pub use dto::{DailySalesSummary, PeriodSalesSummaryResponse, SaleOrderSummary, SalesSummaryResponse};
