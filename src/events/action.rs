use super::ModifierKey;
use std::fmt;

/// Одно действие, выполненное через мост автоматизации
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeAction {
    Activate,
    Reveal { pane: String, anchor: String },
    KeyDown(ModifierKey),
    Click(String),
    KeyUp(ModifierKey),
    Quit,
    Alert { title: String, message: String },
}

impl BridgeAction {
    pub fn reveal(pane: &str, anchor: &str) -> Self {
        Self::Reveal {
            pane: pane.to_string(),
            anchor: anchor.to_string(),
        }
    }

    pub fn click(button: &str) -> Self {
        Self::Click(button.to_string())
    }

    pub fn alert(title: &str, message: &str) -> Self {
        Self::Alert {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for BridgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeAction::Activate => write!(f, "activate"),
            BridgeAction::Reveal { pane, anchor } => write!(f, "reveal({}/{})", pane, anchor),
            BridgeAction::KeyDown(key) => write!(f, "keyDown({})", key),
            BridgeAction::Click(button) => write!(f, "click(\"{}\")", button),
            BridgeAction::KeyUp(key) => write!(f, "keyUp({})", key),
            BridgeAction::Quit => write!(f, "quit"),
            BridgeAction::Alert { title, message } => {
                write!(f, "alert(\"{}\": \"{}\")", title, message)
            }
        }
    }
}
