pub mod a001_sale_order;
pub mod a002_invoice;
pub mod d400_sales_summary;
pub mod d401_invoice_summary;
