use crate::config::Config;
use crate::error::Result;
use crate::events::ModifierKey;

/// Minimal interface to the preference application and System Events.
///
/// Every call blocks until the external automation call returns.
pub trait AutomationBridge {
    /// Bring the preference application to the foreground
    fn activate(&self) -> Result<()>;

    /// Reveal a named anchor inside a named pane
    fn reveal_anchor(&self, pane: &str, anchor: &str) -> Result<()>;

    fn key_down(&self, key: ModifierKey) -> Result<()>;

    fn key_up(&self, key: ModifierKey) -> Result<()>;

    /// Find a button by accessible name in the first window and click it
    fn click_button(&self, button: &str) -> Result<()>;

    fn quit(&self) -> Result<()>;

    /// Show a single alert dialog to the user
    fn alert(&self, title: &str, message: &str) -> Result<()>;
}

/// Factory function to create an appropriate bridge based on the dry_run flag
pub fn create_bridge(config: &Config, dry_run: bool) -> Result<Box<dyn AutomationBridge>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunBridge::new()))
    } else {
        Ok(Box::new(super::osascript::OsascriptBridge::new(config)?))
    }
}
