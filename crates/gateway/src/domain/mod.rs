pub mod a001_sale_order;
pub mod a002_invoice;
