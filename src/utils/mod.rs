pub mod permissions;

// ✅ Макрос условного логирования: скрипты форматируются только при включённом DEBUG
#[macro_export]
macro_rules! debug_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}
