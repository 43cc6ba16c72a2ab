use crate::config::Config;
use crate::error::{DetectError, Result};
use crate::events::ModifierKey;
use crate::utils::permissions::accessibility_hint;
use crate::{debug_if_enabled, detect_error};
use std::process::Command;
use tracing::{debug, warn};

use super::r#trait::AutomationBridge;

/// Настоящий мост: каждое действие - отдельный JXA-скрипт через osascript
pub struct OsascriptBridge {
    osascript_path: String,
    application: String,
    events_application: String,
}

impl OsascriptBridge {
    pub fn new(config: &Config) -> Result<Self> {
        debug!(
            "Инициализация OsascriptBridge ({} / {})",
            config.preferences.application, config.bridge.events_application
        );

        Ok(Self {
            osascript_path: config.bridge.osascript_path.clone(),
            application: config.preferences.application.clone(),
            events_application: config.bridge.events_application.clone(),
        })
    }

    fn preferences(&self) -> Result<String> {
        Ok(format!("Application({})", js_string(&self.application)?))
    }

    fn events(&self) -> Result<String> {
        Ok(format!("Application({})", js_string(&self.events_application)?))
    }

    fn run_script(&self, script: &str) -> Result<()> {
        debug_if_enabled!("osascript: {}", script);

        let output = Command::new(&self.osascript_path)
            .args(["-l", "JavaScript", "-e", script])
            .output()
            .map_err(|e| {
                debug!("osascript не найден или не работает: {}", e);
                DetectError::Io(e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("osascript вернул ошибку: {}", stderr.trim());
            let message = extract_error_message(&stderr)
                .unwrap_or_else(|| format!("osascript exited with {}", output.status));
            if message.contains("assistive access") {
                warn!("{}", accessibility_hint());
            }
            return Err(DetectError::Automation(message));
        }

        Ok(())
    }

    fn activate_script(&self) -> Result<String> {
        Ok(format!("{}.activate();", self.preferences()?))
    }

    fn reveal_script(&self, pane: &str, anchor: &str) -> Result<String> {
        Ok(format!(
            "{}.panes[{}].anchors[{}].reveal();",
            self.preferences()?,
            js_string(pane)?,
            js_string(anchor)?
        ))
    }

    fn key_script(&self, action: &str, key: ModifierKey) -> Result<String> {
        Ok(format!(
            "{}.{}({});",
            self.events()?,
            action,
            js_string(key.system_events_code())?
        ))
    }

    /// Кнопка ищется в первом окне процесса приложения настроек
    fn click_script(&self, button: &str) -> Result<String> {
        Ok(format!(
            "{}.processes[{}].windows[0].buttons[{}].click();",
            self.events()?,
            js_string(&self.application)?,
            js_string(button)?
        ))
    }

    fn quit_script(&self) -> Result<String> {
        Ok(format!("{}.quit();", self.preferences()?))
    }

    // displayAlert доступен только после включения standard additions
    fn alert_script(&self, title: &str, message: &str) -> Result<String> {
        Ok(format!(
            "var app = {}; app.includeStandardAdditions = true; app.displayAlert({}, {{message: {}}});",
            self.preferences()?,
            js_string(title)?,
            js_string(message)?
        ))
    }
}

impl AutomationBridge for OsascriptBridge {
    fn activate(&self) -> Result<()> {
        self.run_script(&self.activate_script()?)
    }

    fn reveal_anchor(&self, pane: &str, anchor: &str) -> Result<()> {
        self.run_script(&self.reveal_script(pane, anchor)?)
    }

    fn key_down(&self, key: ModifierKey) -> Result<()> {
        self.run_script(&self.key_script("keyDown", key)?)
    }

    fn key_up(&self, key: ModifierKey) -> Result<()> {
        self.run_script(&self.key_script("keyUp", key)?)
    }

    fn click_button(&self, button: &str) -> Result<()> {
        self.run_script(&self.click_script(button)?)
    }

    fn quit(&self) -> Result<()> {
        self.run_script(&self.quit_script()?)
    }

    fn alert(&self, title: &str, message: &str) -> Result<()> {
        self.run_script(&self.alert_script(title, message)?)
    }
}

/// JSON-строка является корректным строковым литералом JavaScript
fn js_string(value: &str) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| detect_error!(automation, "Не удалось экранировать '{}': {}", value, e))
}

/// Достаёт сообщение из stderr osascript вида
/// `0:45: execution error: Error: Error: Can't get object. (-1728)`
fn extract_error_message(stderr: &str) -> Option<String> {
    let line = stderr.lines().map(str::trim).find(|l| !l.is_empty())?;

    let mut message = match line.find("execution error: ") {
        Some(pos) => &line[pos + "execution error: ".len()..],
        None => line,
    };

    while let Some(rest) = message.strip_prefix("Error: ") {
        message = rest;
    }

    // Код ошибки AppleEvent в конце: " (-1728)"
    if let Some(pos) = message.rfind(" (-") {
        let code = &message[pos + 3..];
        if code.ends_with(')') && code[..code.len() - 1].chars().all(|c| c.is_ascii_digit()) {
            message = &message[..pos];
        }
    }

    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge() -> OsascriptBridge {
        OsascriptBridge::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_extract_execution_error() {
        let stderr = "0:45: execution error: Error: Error: Can't get object. (-1728)\n";
        assert_eq!(extract_error_message(stderr).unwrap(), "Can't get object.");
    }

    #[test]
    fn test_extract_without_code() {
        let stderr = "execution error: System Events got an error: not allowed assistive access.";
        assert_eq!(
            extract_error_message(stderr).unwrap(),
            "System Events got an error: not allowed assistive access."
        );
    }

    #[test]
    fn test_extract_plain_line() {
        assert_eq!(
            extract_error_message("\n  something broke  \n").unwrap(),
            "something broke"
        );
        assert!(extract_error_message("   \n").is_none());
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("Detect Displays").unwrap(), "\"Detect Displays\"");
        assert_eq!(js_string("a\"b").unwrap(), "\"a\\\"b\"");
    }

    #[test]
    fn test_key_script() {
        let script = bridge().key_script("keyDown", ModifierKey::Option).unwrap();
        assert_eq!(script, "Application(\"System Events\").keyDown(\"eOpt\");");
    }

    #[test]
    fn test_preferences_scripts() {
        let bridge = bridge();
        assert_eq!(
            bridge.activate_script().unwrap(),
            "Application(\"System Preferences\").activate();"
        );
        assert_eq!(
            bridge.reveal_script("Displays", "displaysDisplayTab").unwrap(),
            "Application(\"System Preferences\").panes[\"Displays\"].anchors[\"displaysDisplayTab\"].reveal();"
        );
        assert_eq!(
            bridge.quit_script().unwrap(),
            "Application(\"System Preferences\").quit();"
        );
    }

    #[test]
    fn test_click_script() {
        assert_eq!(
            bridge().click_script("Detect Displays").unwrap(),
            "Application(\"System Events\").processes[\"System Preferences\"].windows[0].buttons[\"Detect Displays\"].click();"
        );
    }

    #[test]
    fn test_alert_script_enables_standard_additions() {
        let script = bridge()
            .alert_script("Unable to detect displays", "control not found")
            .unwrap();
        assert_eq!(
            script,
            "var app = Application(\"System Preferences\"); app.includeStandardAdditions = true; \
             app.displayAlert(\"Unable to detect displays\", {message: \"control not found\"});"
        );
    }

    #[test]
    fn test_scripts_quote_names_with_quotes() {
        let bridge = bridge();
        assert_eq!(
            bridge.click_script("Say \"Hi\"").unwrap(),
            "Application(\"System Events\").processes[\"System Preferences\"].windows[0].buttons[\"Say \\\"Hi\\\"\"].click();"
        );
        let alert = bridge.alert_script("t", "Can't get \"x\"").unwrap();
        assert!(alert.contains("{message: \"Can't get \\\"x\\\"\"}"));
    }

    #[test]
    fn test_missing_osascript_is_io_error() {
        let mut config = Config::default();
        config.bridge.osascript_path = "/nonexistent/osascript".to_string();
        let bridge = OsascriptBridge::new(&config).unwrap();

        let err = bridge.activate().unwrap_err();
        assert!(matches!(err, DetectError::Io(_)));
    }
}
