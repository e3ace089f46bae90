pub mod aggregate;

pub use aggregate::{SaleOrder, SaleOrderPagination};
