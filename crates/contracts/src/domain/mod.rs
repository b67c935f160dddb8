//! Wire types for the purchase-agency REST API, one module per resource.
//! Field names and optionality mirror the backend's JSON exactly.

pub mod export;
pub mod order;
pub mod product;
pub mod purchase_order;
pub mod shipment;
