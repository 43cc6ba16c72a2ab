use serde::{Deserialize, Serialize};
use std::fmt;

/// Клавиша-модификатор, которую можно удерживать через System Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    Option,
    Command,
    Control,
    Shift,
}

impl ModifierKey {
    /// Идентификатор клавиши для keyDown/keyUp в System Events
    pub fn system_events_code(&self) -> &'static str {
        match self {
            ModifierKey::Option => "eOpt",
            ModifierKey::Command => "eCmd",
            ModifierKey::Control => "eCnt",
            ModifierKey::Shift => "eSft",
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModifierKey::Option => "option",
            ModifierKey::Command => "command",
            ModifierKey::Control => "control",
            ModifierKey::Shift => "shift",
        };
        write!(f, "{}", name)
    }
}
