use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::{join_all, try_join_all};
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use rendezvous_tracker::api::api::api_service;
use rendezvous_tracker::api::structs::api_service_data::ApiServiceData;
use rendezvous_tracker::common::common::{current_timestamp, setup_logging, shutdown_signalled, shutdown_waiting, udp_check_host_and_port_used};
use rendezvous_tracker::config::structs::configuration::Configuration;
use rendezvous_tracker::console::console::console_service;
use rendezvous_tracker::stats::enums::stats_event::StatsEvent;
use rendezvous_tracker::structs::Cli;
use rendezvous_tracker::tracker::structs::file_tracker::FileTracker;
use rendezvous_tracker::udp::udp::udp_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(bind) = args.bind.as_ref() {
        if let Some(udp_server) = config.udp_server.first_mut() {
            udp_server.bind_address = bind.clone();
        }
        if let Err(error) = config.validate() {
            eprintln!("[ERROR] {error}");
            exit(101);
        }
    }
    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    let runtime = Builder::new_multi_thread()
        .thread_name("core")
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let tracker = Arc::new(FileTracker::new(config.clone()));
        let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

        let mut deadlocks_handler = shutdown_rx.clone();
        tokio::spawn(async move {
            info!("[BOOT] Starting thread for deadlocks...");
            loop {
                if shutdown_waiting(Duration::from_secs(30), &mut deadlocks_handler).await {
                    info!("[BOOT] Shutting down thread for deadlocks...");
                    return;
                }
                let deadlocks = deadlock::check_deadlock();
                if !deadlocks.is_empty() {
                    info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                    for (i, threads) in deadlocks.iter().enumerate() {
                        info!("[DEADLOCK] #{i}");
                        for t in threads {
                            info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                            info!("[DEADLOCK] {:#?}", t.backtrace());
                            sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                        }
                    }
                }
            }
        });

        let mut api_handles = Vec::new();
        let mut api_futures = Vec::new();
        for api_server_object in &config.api_server {
            if api_server_object.enabled {
                let address: SocketAddr = match api_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[API] Invalid bind address {}: {error}", api_server_object.bind_address);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    tracker: tracker.clone(),
                });
                let (handle, future) = api_service(
                    address,
                    data,
                    api_server_object.keep_alive,
                    api_server_object.request_timeout,
                    api_server_object.disconnect_timeout,
                    api_server_object.threads,
                ).await?;
                api_handles.push(handle);
                api_futures.push(future);
            }
        }
        if !api_futures.is_empty() {
            tokio::spawn(async move {
                if let Err(error) = try_join_all(api_futures).await {
                    sentry::capture_error(&error);
                    error!("[API] Server stopped with an error: {error}");
                }
            });
        }

        let mut udp_futures = Vec::new();
        for udp_server_object in &config.udp_server {
            if udp_server_object.enabled {
                udp_check_host_and_port_used(&udp_server_object.bind_address)?;
                let address: SocketAddr = match udp_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[UDP] Invalid bind address {}: {error}", udp_server_object.bind_address);
                        exit(1);
                    }
                };

                let udp_future = udp_service(
                    address,
                    udp_server_object.threads,
                    udp_server_object.receive_buffer_size,
                    udp_server_object.send_buffer_size,
                    udp_server_object.reuse_address,
                    tracker.clone(),
                    shutdown_rx.clone(),
                ).await?;
                udp_futures.push(udp_future);
            }
        }

        let tracker_sweep = tracker.clone();
        let sweep_handler = shutdown_rx.clone();
        info!(
            "[BOOT] Starting thread for peers cleanup with {} seconds delay...",
            config.tracker_config.peers_cleanup_interval
        );
        let sweep_future = tokio::spawn(async move {
            tracker_sweep.sweep_loop(sweep_handler).await;
        });

        let tracker_stats = tracker.clone();
        let mut stats_handler = shutdown_rx.clone();
        let console_interval = config.log_console_interval;
        info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
        tokio::spawn(async move {
            loop {
                if shutdown_waiting(Duration::from_secs(console_interval), &mut stats_handler).await {
                    info!("[BOOT] Shutting down thread for console updates...");
                    return;
                }
                tracker_stats.set_stats(StatsEvent::TimestampConsole, current_timestamp());
                let stats = tracker_stats.get_stats();
                info!(
                    "[STATS] Files: {} - Peers: {} - Tracked: {} | Shares: {} - Gets: {} - Keep-alives: {} - Invalid: {} | Replies: {} - Send failures: {} - Evicted: {}",
                    stats.files, stats.peers, stats.tracked_peers,
                    stats.shares_handled, stats.gets_handled, stats.keep_alives_handled, stats.invalid_requests,
                    stats.responses_sent, stats.send_failures, stats.peers_evicted
                );
            }
        });

        if config.tracker_config.interactive_console {
            tokio::spawn(console_service(tracker.clone(), shutdown_tx.clone(), shutdown_rx.clone()));
        }

        let mut quit_handler = shutdown_rx.clone();
        tokio::select! {
            _ = tokio_shutdown.handle() => {
                info!("Shutdown request received, shutting down...");
            }
            _ = shutdown_signalled(&mut quit_handler) => {
                info!("Quit requested from the console, shutting down...");
            }
        }

        let _ = shutdown_tx.send(true);

        for result in join_all(udp_futures).await {
            if let Err(error) = result {
                sentry::capture_error(&error);
                error!("Errors happened on shutting down UDP sockets: {error}");
            }
        }
        if let Err(error) = sweep_future.await {
            warn!("[SWEEP] Sweeper stopped abnormally: {error}");
        }
        for handle in api_handles {
            handle.stop(true).await;
        }

        info!("Server shutting down completed");
        Ok::<(), std::io::Error>(())
    });

    runtime.shutdown_background();
    result
}
