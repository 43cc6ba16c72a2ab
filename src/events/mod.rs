pub mod action;
pub mod modifier;

pub use action::BridgeAction;
pub use modifier::ModifierKey;
