use crate::error::Result;
use crate::events::{BridgeAction, ModifierKey};
use parking_lot::Mutex;
use tracing::info;

use super::r#trait::AutomationBridge;

/// Мост без побочных эффектов: только логирует и запоминает действия
pub struct DryRunBridge {
    journal: Mutex<Vec<BridgeAction>>,
}

impl DryRunBridge {
    pub fn new() -> Self {
        info!("Dry-run режим - мост автоматизации работает в режиме эмуляции");
        Self {
            journal: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, action: BridgeAction) -> Result<()> {
        info!("[DRY RUN] {}", action);
        self.journal.lock().push(action);
        Ok(())
    }

    /// Действия в порядке выполнения
    pub fn journal(&self) -> Vec<BridgeAction> {
        self.journal.lock().clone()
    }
}

impl AutomationBridge for DryRunBridge {
    fn activate(&self) -> Result<()> {
        self.record(BridgeAction::Activate)
    }

    fn reveal_anchor(&self, pane: &str, anchor: &str) -> Result<()> {
        self.record(BridgeAction::reveal(pane, anchor))
    }

    fn key_down(&self, key: ModifierKey) -> Result<()> {
        self.record(BridgeAction::KeyDown(key))
    }

    fn key_up(&self, key: ModifierKey) -> Result<()> {
        self.record(BridgeAction::KeyUp(key))
    }

    fn click_button(&self, button: &str) -> Result<()> {
        self.record(BridgeAction::click(button))
    }

    fn quit(&self) -> Result<()> {
        self.record(BridgeAction::Quit)
    }

    fn alert(&self, title: &str, message: &str) -> Result<()> {
        self.record(BridgeAction::alert(title, message))
    }
}

impl Drop for DryRunBridge {
    fn drop(&mut self) {
        let journal = self.journal();
        let sequence: Vec<String> = journal.iter().map(|a| a.to_string()).collect();
        info!("Dry-run: выполнено {} действий: {}", journal.len(), sequence.join(" → "));
    }
}
