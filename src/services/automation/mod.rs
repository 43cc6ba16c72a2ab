//! Automation bridge: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for performing single
//! UI actions against the preference application and System Events.
//! The ordering of actions, key release guarantees and error-to-alert
//! conversion belong exclusively to DisplayDetectionTrigger.

mod dry_run;
mod osascript;
mod r#trait;

pub use self::r#trait::{create_bridge, AutomationBridge};
