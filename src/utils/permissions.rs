use crate::config::Config;
use crate::detect_error;
use crate::error::Result;
use std::path::PathBuf;
use tracing::{info, warn};
use which::which;

/// Проверить, что мост автоматизации может работать на этой машине
pub fn check_permissions(config: &Config) -> Result<()> {
    info!("Проверка окружения...");

    check_platform()?;
    check_osascript(&config.bridge.osascript_path)?;
    check_not_root();

    info!("Проверка окружения завершена успешно");
    Ok(())
}

fn check_platform() -> Result<()> {
    if cfg!(target_os = "macos") {
        return Ok(());
    }

    Err(detect_error!(
        permission,
        "UI-автоматизация через System Events доступна только на macOS (текущая ОС: {})",
        std::env::consts::OS
    ))
}

/// Найти osascript: явный путь проверяется как есть, имя ищется в PATH.
/// Файл без права на исполнение считается отсутствующим
fn check_osascript(osascript_path: &str) -> Result<PathBuf> {
    let path = which(osascript_path).map_err(|e| {
        detect_error!(permission, "{} не найден или не исполняемый: {}", osascript_path, e)
    })?;

    info!("osascript найден: {}", path.display());
    Ok(path)
}

fn check_not_root() {
    match std::env::var("USER") {
        Ok(user) if user == "root" => {
            warn!("⚠️  Приложение запущено от имени root!");
            warn!("   События клавиатуры System Events уходят в сессию root,");
            warn!("   а не в сессию пользователя с открытым System Preferences");
        }
        Ok(user) => {
            info!("Приложение запущено от имени пользователя: {}", user);
        }
        Err(_) => {
            warn!("Не удалось определить пользователя");
        }
    }
}

/// Подсказка, как выдать терминалу право управлять интерфейсом
pub fn accessibility_hint() -> String {
    "Разрешите терминалу управление компьютером: System Preferences → Security & Privacy → \
     Privacy → Accessibility"
        .to_string()
}
