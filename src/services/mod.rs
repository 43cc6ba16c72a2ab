pub mod automation;
pub mod display_trigger;
pub mod key_hold;

pub use automation::create_bridge;
pub use display_trigger::{DisplayDetectionTrigger, TriggerOutcome};
