use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};
mod config;
mod error;
mod events;
pub mod mappings;
mod services;
mod utils;

use config::Config;
use services::{create_bridge, DisplayDetectionTrigger, TriggerOutcome};

#[derive(Parser, Debug)]
#[command(name = "detect-displays")]
#[command(about = "Нажимает Detect Displays в System Preferences с удержанием Option")]
struct Args {
    /// Путь к файлу конфигурации (необязателен)
    #[arg(short, long, default_value = "detect-displays.toml")]
    config: String,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Инициализация системы логирования
    init_tracing(&args.log_level)?;

    info!("Запуск detect-displays v{}", env!("CARGO_PKG_VERSION"));

    // Загрузка конфигурации
    let config = Config::load(&args.config)?;
    info!("Конфигурация загружена (файл: {})", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    } else {
        utils::permissions::check_permissions(&config)?;
    }

    let bridge = create_bridge(&config, args.dry_run)?;
    let mut trigger = DisplayDetectionTrigger::new(&config, bridge.as_ref())?;

    // Ошибка нажатия уже показана пользователю через alert и не меняет код выхода
    match trigger.run()? {
        TriggerOutcome::Clicked => info!("Мониторы обнаружены"),
        TriggerOutcome::ClickFailed { message } => {
            warn!("Обнаружение мониторов не выполнено: {}", message)
        }
    }

    debug!("Пройденные стадии: {:?}", trigger.history());
    info!("detect-displays завершил работу");
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    Ok(())
}
