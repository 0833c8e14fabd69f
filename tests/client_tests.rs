mod common;

use std::sync::Arc;
use std::time::Duration;
use futures_util::future::join_all;
use tokio::time::Instant;
use rendezvous_tracker::client::enums::client_error::ClientError;
use rendezvous_tracker::client::structs::tracker_client::TrackerClient;
use rendezvous_tracker::protocol::structs::peer_address::PeerAddress;

#[tokio::test]
async fn test_concurrent_gets_receive_their_own_reply() {
    let tracker = common::create_test_tracker();
    let mut expected = Vec::new();
    for index in 0..16u16 {
        let file_name = format!("file-{index}.bin");
        let peer = PeerAddress::new("127.0.0.1", 9000 + index);
        tracker.add_peer(&file_name, peer.clone(), Instant::now());
        expected.push((file_name, peer));
    }
    let (addr, shutdown) = common::start_udp_tracker(tracker).await;

    let client = Arc::new(TrackerClient::new(addr, Duration::from_secs(5)));
    let lookups = expected.iter().map(|(file_name, _)| {
        let client = client.clone();
        let file_name = file_name.clone();
        tokio::spawn(async move { client.get_peers(&file_name).await })
    });
    let results = join_all(lookups).await;

    for ((_, peer), result) in expected.iter().zip(results) {
        assert_eq!(result.unwrap().unwrap(), vec![peer.clone()]);
    }

    shutdown.send(true).unwrap();
}

#[tokio::test]
async fn test_get_against_silent_tracker_times_out() {
    let silent = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let client = TrackerClient::new(silent.local_addr().unwrap(), Duration::from_millis(150));

    let started = std::time::Instant::now();
    let result = client.get_peers("movie.mp4").await;
    assert!(matches!(result, Err(ClientError::NoResponse { .. })));
    assert!(started.elapsed() >= Duration::from_millis(150));
}
