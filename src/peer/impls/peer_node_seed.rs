use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use parking_lot::RwLock;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use crate::client::structs::tracker_client::TrackerClient;
use crate::common::common::{current_timestamp, shutdown_signalled, shutdown_waiting};
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_node::PeerNode;
use crate::peer::structs::upload_record::UploadRecord;
use crate::protocol::structs::peer_address::PeerAddress;

impl PeerNode {
    /// Starts serving `data` as `file_name` and returns the announced address.
    ///
    /// The listener and the keep-alive loop run in background tasks until
    /// `shutdown` flips.
    #[tracing::instrument(skip(data, shutdown), level = "debug")]
    pub async fn seed(&self, file_name: &str, data: Arc<Vec<u8>>, shutdown: watch::Receiver<bool>) -> Result<PeerAddress, PeerError>
    {
        let listener = TcpListener::bind(self.listen_address.as_str()).await?;
        let advertised = self.advertised_address(listener.local_addr()?.port())?;
        info!("[PEER] Seeding {file_name} ({} bytes) on {advertised}", data.len());

        self.client.share(file_name, advertised.clone()).await?;

        tokio::spawn(PeerNode::keep_alive_loop(
            self.client.clone(),
            advertised.clone(),
            self.keep_alive_interval,
            shutdown.clone(),
        ));
        tokio::spawn(PeerNode::serve_loop(
            listener,
            file_name.to_string(),
            data,
            self.uploads.clone(),
            shutdown,
        ));

        Ok(advertised)
    }

    pub async fn keep_alive_loop(client: Arc<TrackerClient>, peer: PeerAddress, interval: Duration, mut shutdown: watch::Receiver<bool>)
    {
        loop {
            if let Err(error) = client.keep_alive(peer.clone()).await {
                warn!("[PEER] Keep-alive for {peer} failed: {error}");
            }
            if shutdown_waiting(interval, &mut shutdown).await {
                info!("[PEER] Stopping keep-alive for {peer}");
                return;
            }
        }
    }

    pub async fn serve_loop(listener: TcpListener, file_name: String, data: Arc<Vec<u8>>, uploads: Arc<RwLock<Vec<UploadRecord>>>, mut shutdown: watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = shutdown_signalled(&mut shutdown) => {
                    info!("[PEER] Stopping file server for {file_name}");
                    return;
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            let peer = PeerAddress::from(remote_addr);
                            info!("[PEER] Uploading {file_name} to {peer}");
                            uploads.write().push(UploadRecord {
                                timestamp: current_timestamp(),
                                peer,
                                file_name: file_name.clone(),
                            });
                            tokio::spawn(PeerNode::upload(stream, data.clone()));
                        }
                        Err(error) => {
                            warn!("[PEER] Accept failed: {error}");
                        }
                    }
                }
            }
        }
    }

    async fn upload(mut stream: TcpStream, data: Arc<Vec<u8>>)
    {
        if let Err(error) = stream.write_all(&data).await {
            warn!("[PEER] Upload failed: {error}");
            return;
        }
        let _ = stream.shutdown().await;
    }
}
