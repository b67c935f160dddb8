//! Shared contracts between the browser console and the purchase-agency API.
//!
//! Everything in this crate is platform-neutral: wire types for the REST
//! endpoints plus the pricing and channel logic the pages run before any
//! request is issued.

pub mod channel;
pub mod domain;
pub mod pricing;
