pub mod aggregate;

pub use aggregate::{Invoice, InvoicePagination};
