use crate::error::Result;
use crate::events::ModifierKey;
use crate::services::automation::AutomationBridge;
use tracing::{debug, warn};

/// Удержание клавиши-модификатора на время одного действия.
///
/// Guard создаётся до нажатия: если само нажатие не удалось, клавиша всё
/// равно будет отпущена. Отпускание происходит ровно один раз - либо явно
/// через [`KeyHold::release`], либо в `Drop`.
pub struct KeyHold<'a> {
    bridge: &'a dyn AutomationBridge,
    key: ModifierKey,
    released: bool,
}

impl<'a> KeyHold<'a> {
    pub fn arm(bridge: &'a dyn AutomationBridge, key: ModifierKey) -> Self {
        Self {
            bridge,
            key,
            released: false,
        }
    }

    pub fn press(&self) -> Result<()> {
        debug!("Нажатие клавиши {}", self.key);
        self.bridge.key_down(self.key)
    }

    /// Отпустить клавишу, вернув ошибку моста, если она была
    pub fn release(mut self) -> Result<()> {
        self.release_once()
    }

    fn release_once(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        debug!("Отпускание клавиши {}", self.key);
        self.bridge.key_up(self.key)
    }
}

impl Drop for KeyHold<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.release_once() {
            warn!("Не удалось отпустить клавишу {}: {}", self.key, e);
        }
    }
}
