use crate::error::{DetectError, Result};
use crate::events::ModifierKey;

/// Преобразование имён клавиш из конфигурации в модификаторы System Events
pub struct KeyNameToModifier;

impl KeyNameToModifier {
    /// Получить модификатор по его имени (регистронезависимо)
    pub fn translate(key_name: &str) -> Result<ModifierKey> {
        let normalized = key_name.trim().to_lowercase();
        let key = match normalized.as_str() {
            "option" | "opt" | "alt" | "eopt" => ModifierKey::Option,
            "command" | "cmd" | "super" | "ecmd" => ModifierKey::Command,
            "control" | "ctrl" | "ecnt" => ModifierKey::Control,
            "shift" | "esft" => ModifierKey::Shift,
            _ => return Err(DetectError::UnknownKey(key_name.to_string())),
        };
        Ok(key)
    }

    /// Проверить, известно ли имя клавиши
    pub fn is_supported(key_name: &str) -> bool {
        Self::translate(key_name).is_ok()
    }
}
