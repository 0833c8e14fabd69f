use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio::sync::watch;
use tokio_shutdown::Shutdown;
use rendezvous_tracker::common::common::{setup_logging, shutdown_signalled};
use rendezvous_tracker::config::structs::configuration::Configuration;
use rendezvous_tracker::peer::enums::peer_error::PeerError;
use rendezvous_tracker::peer::peer_console::peer_console_service;
use rendezvous_tracker::peer::structs::peer_node::PeerNode;
use rendezvous_tracker::structs::{PeerCli, PeerCommand};

/// Runs `command`; while seeding, `console` receives the shutdown sender for the operator console.
async fn run(command: PeerCommand, node: Arc<PeerNode>, console: Option<watch::Sender<bool>>, mut shutdown: watch::Receiver<bool>) -> Result<(), PeerError>
{
    match command {
        PeerCommand::Share { path } => {
            let file_name = Path::new(&path).file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("not a file path: {path}")))?
                .to_string();
            let data = tokio::fs::read(&path).await?;
            node.seed(&file_name, Arc::new(data), shutdown.clone()).await?;
        }
        PeerCommand::Get { file_name, output, no_seed } => {
            let (data, provider) = node.fetch(&file_name).await?;
            let output = output.unwrap_or_else(|| file_name.clone());
            tokio::fs::write(&output, &data).await?;
            info!("[PEER] Saved {file_name} from {provider} to {output}");
            if no_seed {
                return Ok(());
            }
            info!("[PEER] Switching to seeder mode");
            node.seed(&file_name, Arc::new(data), shutdown.clone()).await?;
        }
    }

    if let Some(shutdown_tx) = console {
        tokio::spawn(peer_console_service(node.clone(), shutdown_tx, shutdown.clone()));
    }

    shutdown_signalled(&mut shutdown).await;
    info!("[PEER] Served {} upload(s)", node.get_uploads().len());
    Ok(())
}

fn main() -> std::io::Result<()>
{
    let args = PeerCli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(tracker) = args.tracker {
        config.peer_config.tracker_address = tracker;
    }
    if let Some(listen) = args.listen {
        config.peer_config.listen_address = listen;
    }
    if let Err(error) = config.validate() {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    setup_logging(&config);

    let runtime = Builder::new_multi_thread()
        .thread_name("peer")
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let console = config.peer_config.interactive_console.then(|| shutdown_tx.clone());
        tokio::spawn(async move {
            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");
            let _ = shutdown_tx.send(true);
        });

        let node = Arc::new(PeerNode::from_config(&config.peer_config, shutdown_rx.clone())?);
        run(args.command, node, console, shutdown_rx).await
    });

    runtime.shutdown_background();
    if let Err(error) = result {
        error!("[PEER] {error}");
        exit(1);
    }
    Ok(())
}
