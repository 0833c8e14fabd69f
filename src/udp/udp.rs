use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::tracker::structs::file_tracker::FileTracker;
use crate::udp::structs::udp_server::UdpServer;

/// Largest UDP payload; longer datagrams are truncated and fail to decode.
pub const MAX_PACKET_SIZE: usize = 65_507;

pub async fn udp_service(addr: SocketAddr, threads: u64, recv_buffer_size: usize, send_buffer_size: usize, reuse_address: bool, data: Arc<FileTracker>, rx: watch::Receiver<bool>) -> std::io::Result<JoinHandle<()>>
{
    let udp_server = UdpServer::new(data, addr, threads, recv_buffer_size, send_buffer_size, reuse_address).await?;
    info!("[UDP] Starting a server listener on {addr} with {threads} UDP threads");
    Ok(tokio::spawn(async move {
        udp_server.start(rx).await;
    }))
}
