use anyhow::Result;
use log::LevelFilter;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, Mutex};

const LOG_FILE: &str = "bot.log";

fn console_level(raw: &str) -> LevelFilter {
    match raw.to_uppercase().as_str() {
        "ERROR" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn file_level(raw: &str) -> Option<LevelFilter> {
    match raw.to_uppercase().as_str() {
        "ERROR" => Some(LevelFilter::Error),
        "ALL" | "INFO" => Some(LevelFilter::Info),
        _ => None,
    }
}

fn levels_from_env() -> (LevelFilter, Option<LevelFilter>) {
    (
        console_level(&env::var("CONSOLE_LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string())),
        file_level(&env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "OFF".to_string())),
    )
}

/// Console logging at `CONSOLE_LOG_LEVEL`, plus an optional append-only file
/// sink at `FILE_LOG_LEVEL`. Call after `.env` is loaded.
pub fn init_logging() -> Result<()> {
    let (console_level, file_level_config) = levels_from_env();

    let max_level = std::cmp::max(console_level, file_level_config.unwrap_or(LevelFilter::Off));

    let log_file = if file_level_config.is_some() {
        let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
        Some(Arc::new(Mutex::new(file)))
    } else {
        None
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder
        .filter(None, max_level)
        .format(move |buf, record| {
            let line = format!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );

            if record.level() <= console_level {
                writeln!(buf, "{}", line)?;
            }

            if let (Some(level), Some(file)) = (file_level_config, &log_file) {
                if record.level() <= level {
                    if let Ok(mut guard) = file.lock() {
                        let _ = writeln!(guard, "{}", line);
                    }
                }
            }
            Ok(())
        })
        .try_init()?;

    Ok(())
}
