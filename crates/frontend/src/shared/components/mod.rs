pub mod channel_selector;
pub mod ui;

pub use channel_selector::ChannelSelector;
