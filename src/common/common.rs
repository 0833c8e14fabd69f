use std::time::Duration;
use chrono::Utc;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn};
use tokio::sync::watch;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(log_level: &str) -> Option<log::LevelFilter>
{
    match log_level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            eprintln!("Unknown log level encountered: '{}', falling back to 'info'", config.log_level.as_str());
            log::LevelFilter::Info
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(error) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        eprintln!("Failed to initialize logging: {error}");
        return;
    }
    info!("logging initialized.");
}

/// Sleeps for `timeout`, returning early with `true` when shutdown is signalled.
///
/// A dropped sender counts as a shutdown request.
pub async fn shutdown_waiting(timeout: Duration, shutdown: &mut watch::Receiver<bool>) -> bool
{
    if *shutdown.borrow() {
        return true;
    }

    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        changed = shutdown.changed() => {
            match changed {
                Ok(_) => *shutdown.borrow(),
                Err(_) => true
            }
        }
    }
}

/// Resolves once shutdown is signalled or the sender is dropped.
pub async fn shutdown_signalled(shutdown: &mut watch::Receiver<bool>)
{
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}

pub fn udp_check_host_and_port_used(bind_address: &str) -> std::io::Result<()>
{
    if cfg!(target_os = "windows") {
        if let Err(error) = std::net::UdpSocket::bind(bind_address) {
            warn!("Unable to bind to {bind_address}: {error}");
            return Err(error);
        }
    }
    Ok(())
}

pub fn current_timestamp() -> i64
{
    Utc::now().timestamp()
}
