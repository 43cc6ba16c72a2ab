use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::events::ModifierKey;
use crate::mappings::KeyNameToModifier;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub preferences: PreferencesConfig,
    pub trigger: TriggerConfig,
    pub bridge: BridgeConfig,
}

/// Приложение настроек и место внутри него, которое нужно открыть
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreferencesConfig {
    pub application: String,
    pub pane: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TriggerConfig {
    pub button: String,
    pub modifier: String,
    pub alert_title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BridgeConfig {
    pub events_application: String,
    pub osascript_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferences: PreferencesConfig {
                application: "System Preferences".to_string(),
                pane: "Displays".to_string(),
                anchor: "displaysDisplayTab".to_string(),
            },
            trigger: TriggerConfig {
                button: "Detect Displays".to_string(),
                modifier: "option".to_string(),
                alert_title: "Unable to detect displays".to_string(),
            },
            bridge: BridgeConfig {
                events_application: "System Events".to_string(),
                osascript_path: "osascript".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        // Файл конфигурации необязателен: без него работают значения по умолчанию
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("DETECT_DISPLAYS_").split("__"));

        Self::from_figment(figment)
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("preferences.application", &self.preferences.application),
            ("preferences.pane", &self.preferences.pane),
            ("preferences.anchor", &self.preferences.anchor),
            ("trigger.button", &self.trigger.button),
            ("trigger.alert_title", &self.trigger.alert_title),
            ("bridge.events_application", &self.bridge.events_application),
            ("bridge.osascript_path", &self.bridge.osascript_path),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                anyhow::bail!("Параметр {} не может быть пустым", name);
            }
        }

        if !KeyNameToModifier::is_supported(&self.trigger.modifier) {
            anyhow::bail!("Неверный модификатор: '{}'", self.trigger.modifier);
        }

        Ok(())
    }

    /// Модификатор, удерживаемый во время нажатия кнопки
    pub fn modifier_key(&self) -> Result<ModifierKey> {
        Ok(KeyNameToModifier::translate(&self.trigger.modifier)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.modifier_key().unwrap(), ModifierKey::Option);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(
            r#"
            [trigger]
            button = "Gather Windows"
            modifier = "cmd"
            "#,
        ));

        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.trigger.button, "Gather Windows");
        assert_eq!(config.modifier_key().unwrap(), ModifierKey::Command);
        // Остальные значения остаются по умолчанию
        assert_eq!(config.preferences.pane, "Displays");
        assert_eq!(config.trigger.alert_title, "Unable to detect displays");
    }

    #[test]
    fn test_invalid_modifier_rejected() {
        let mut config = Config::default();
        config.trigger.modifier = "hyper".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = Config::default();
        config.preferences.anchor = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("preferences.anchor"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/detect-displays.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
