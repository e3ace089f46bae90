pub mod d400_sales_summary;
pub mod d401_invoice_summary;
