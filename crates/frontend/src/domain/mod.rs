pub mod order;
pub mod product;
pub mod purchase_order;
pub mod shipment;
