pub mod channel_context;
pub mod global_context;
pub mod header;
