#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use rand::RngExt;
use tempfile::TempDir;
use tokio::sync::watch;
use rendezvous_tracker::config::structs::configuration::Configuration;
use rendezvous_tracker::protocol::structs::peer_address::PeerAddress;
use rendezvous_tracker::tracker::structs::file_tracker::FileTracker;
use rendezvous_tracker::udp::structs::udp_server::UdpServer;

pub type TestTracker = Arc<FileTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.tracker_config.interactive_console = false;
    config.udp_server[0].bind_address = String::from("127.0.0.1:0");
    Arc::new(config)
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(FileTracker::new(create_test_config()))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_peer() -> PeerAddress {
    let mut rng = rand::rng();
    let octets: [u8; 4] = rng.random();
    let port: u16 = rng.random_range(1024..u16::MAX);
    PeerAddress::new(format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]), port)
}

pub fn random_file_name() -> String {
    let mut rng = rand::rng();
    let id: u32 = rng.random();
    format!("file-{id:08x}.bin")
}

/// Starts a UDP server on a loopback ephemeral port.
///
/// Dropping the returned sender, or sending `true`, stops it.
pub async fn start_udp_tracker(tracker: TestTracker) -> (SocketAddr, watch::Sender<bool>) {
    let server = UdpServer::new(tracker, "127.0.0.1:0".parse().unwrap(), 2, 0, 0, true).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move { server.start(rx).await });
    (addr, tx)
}

pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition was not met in time");
}
