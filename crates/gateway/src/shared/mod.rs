pub mod api_error;
pub mod config;
pub mod daily_aggregator;
pub mod erp;
pub mod format;
pub mod pagination;
pub mod period;
pub mod references;
