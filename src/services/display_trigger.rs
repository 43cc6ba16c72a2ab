use crate::config::Config;
use crate::error::Result;
use crate::events::ModifierKey;
use crate::services::automation::AutomationBridge;
use crate::services::key_hold::KeyHold;
use tracing::{debug, error, info, warn};

/// Стадии одного запуска. Terminated - конечная на всех путях
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerStage {
    Idle,
    Activated,
    PaneRevealed,
    KeyHeld,
    Clicked,
    ClickFailed,
    KeyReleased,
    Terminated,
}

/// Итог попытки нажатия кнопки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Clicked,
    ClickFailed { message: String },
}

pub struct DisplayDetectionTrigger<'a> {
    bridge: &'a dyn AutomationBridge,
    pane: String,
    anchor: String,
    button: String,
    alert_title: String,
    key: ModifierKey,
    history: Vec<TriggerStage>,
}

impl<'a> DisplayDetectionTrigger<'a> {
    pub fn new(config: &Config, bridge: &'a dyn AutomationBridge) -> Result<Self> {
        Ok(Self {
            bridge,
            pane: config.preferences.pane.clone(),
            anchor: config.preferences.anchor.clone(),
            button: config.trigger.button.clone(),
            alert_title: config.trigger.alert_title.clone(),
            key: config.modifier_key()?,
            history: vec![TriggerStage::Idle],
        })
    }

    pub fn stage(&self) -> TriggerStage {
        self.history.last().copied().unwrap_or(TriggerStage::Idle)
    }

    /// Все пройденные стадии, начиная с Idle
    pub fn history(&self) -> &[TriggerStage] {
        &self.history
    }

    fn advance(&mut self, stage: TriggerStage) {
        debug!("DisplayDetectionTrigger: {:?} → {:?}", self.stage(), stage);
        self.history.push(stage);
    }

    /// Выполнить последовательность целиком.
    ///
    /// Ошибки activate/reveal не перехватываются. Ошибка нажатия клавиши или
    /// кнопки превращается в alert и не пробрасывается дальше.
    pub fn run(&mut self) -> Result<TriggerOutcome> {
        let bridge = self.bridge;

        bridge.activate()?;
        self.advance(TriggerStage::Activated);

        bridge.reveal_anchor(&self.pane, &self.anchor)?;
        self.advance(TriggerStage::PaneRevealed);

        // Guard взводится до нажатия: неудачный keyDown тоже получит keyUp
        let hold = KeyHold::arm(bridge, self.key);
        let attempt = match hold.press() {
            Ok(()) => {
                self.advance(TriggerStage::KeyHeld);
                bridge.click_button(&self.button)
            }
            Err(e) => Err(e),
        };

        let outcome = match attempt {
            Ok(()) => {
                self.advance(TriggerStage::Clicked);
                info!("Кнопка \"{}\" нажата с удержанием {}", self.button, self.key);
                TriggerOutcome::Clicked
            }
            Err(e) => {
                self.advance(TriggerStage::ClickFailed);
                let message = e.message();
                warn!("Не удалось нажать \"{}\": {}", self.button, message);
                if let Err(alert_err) = bridge.alert(&self.alert_title, &message) {
                    error!("Не удалось показать сообщение об ошибке: {}", alert_err);
                }
                TriggerOutcome::ClickFailed { message }
            }
        };

        let released = hold.release();
        if let Err(e) = &released {
            error!("Не удалось отпустить клавишу {}: {}", self.key, e);
        }
        self.advance(TriggerStage::KeyReleased);

        let quit = bridge.quit();
        self.advance(TriggerStage::Terminated);

        released?;
        quit?;
        Ok(outcome)
    }
}
