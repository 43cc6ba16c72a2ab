use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    /// Единственная доменная ошибка: элемент не найден, действие запрещено,
    /// приложение не отвечает
    #[error("Ошибка UI-автоматизации: {0}")]
    Automation(String),

    #[error("Неизвестная клавиша-модификатор: {0}")]
    UnknownKey(String),

    #[error("Недостаточно прав доступа: {0}")]
    Permission(String),
}

impl DetectError {
    /// Текст ошибки без префикса - именно его видит пользователь в alert
    pub fn message(&self) -> String {
        match self {
            DetectError::Automation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! detect_error {
    (automation, $($arg:tt)*) => {
        $crate::error::DetectError::Automation(format!($($arg)*))
    };
    (permission, $($arg:tt)*) => {
        $crate::error::DetectError::Permission(format!($($arg)*))
    };
}
