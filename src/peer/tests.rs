#[cfg(test)]
mod peer_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::sync::watch;
    use crate::client::structs::tracker_client::TrackerClient;
    use crate::config::structs::configuration::Configuration;
    use crate::peer::enums::peer_error::PeerError;
    use crate::peer::structs::peer_node::PeerNode;
    use crate::protocol::structs::peer_address::PeerAddress;
    use crate::tracker::structs::file_tracker::FileTracker;
    use crate::udp::structs::udp_server::UdpServer;

    async fn start_tracker() -> (Arc<FileTracker>, SocketAddr, watch::Sender<bool>) {
        let tracker = Arc::new(FileTracker::new(Arc::new(Configuration::init())));
        let server = UdpServer::new(tracker.clone(), "127.0.0.1:0".parse().unwrap(), 1, 0, 0, true).await.unwrap();
        let addr = server.local_addr().unwrap();
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move { server.start(rx).await });
        (tracker, addr, tx)
    }

    fn node(tracker_addr: SocketAddr) -> PeerNode {
        PeerNode::new(TrackerClient::new(tracker_addr, Duration::from_secs(2)), "127.0.0.1:0", Duration::from_secs(1))
    }

    async fn wait_for_provider(tracker: &FileTracker, file_name: &str) {
        for _ in 0..100 {
            if !tracker.get_peers(file_name).is_empty() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("{file_name} was never shared");
    }

    #[test]
    fn test_advertised_address_uses_bound_port() {
        let node = node("127.0.0.1:6771".parse().unwrap());
        assert_eq!(node.advertised_address(40123).unwrap(), PeerAddress::new("127.0.0.1", 40123));
    }

    #[test]
    fn test_advertised_address_strips_ipv6_brackets() {
        let node = PeerNode::new(TrackerClient::new("127.0.0.1:6771".parse().unwrap(), Duration::from_secs(1)), "[::1]:0", Duration::from_secs(1));
        assert_eq!(node.advertised_address(7000).unwrap(), PeerAddress::new("::1", 7000));
    }

    #[test]
    fn test_advertised_address_rejects_missing_port() {
        let node = PeerNode::new(TrackerClient::new("127.0.0.1:6771".parse().unwrap(), Duration::from_secs(1)), "localhost", Duration::from_secs(1));
        assert!(matches!(node.advertised_address(7000), Err(PeerError::InvalidAddress(_))));
    }

    #[test]
    fn test_advertised_address_rejects_wildcard_host() {
        for listen_address in ["0.0.0.0:0", "[::]:0"] {
            let node = PeerNode::new(TrackerClient::new("127.0.0.1:6771".parse().unwrap(), Duration::from_secs(1)), listen_address, Duration::from_secs(1));
            assert!(matches!(node.advertised_address(7000), Err(PeerError::InvalidAddress(address)) if address == listen_address));
        }
    }

    #[test]
    fn test_from_config_rejects_bad_tracker_address() {
        let mut config = Configuration::init().peer_config;
        config.tracker_address = String::from("not-an-address");
        let (_tx, rx) = watch::channel(false);
        assert!(matches!(PeerNode::from_config(&config, rx), Err(PeerError::InvalidAddress(address)) if address == "not-an-address"));
    }

    #[test]
    fn test_from_config_copies_intervals() {
        let config = Configuration::init().peer_config;
        let (_tx, rx) = watch::channel(false);
        let node = PeerNode::from_config(&config, rx).unwrap();
        assert_eq!(node.keep_alive_interval, Duration::from_secs(config.keep_alive_interval));
        assert_eq!(node.client.request_timeout, Duration::from_secs(config.request_timeout));
    }

    #[tokio::test]
    async fn test_seed_then_fetch_transfers_file() {
        let (tracker, tracker_addr, tracker_tx) = start_tracker().await;
        let (seed_tx, seed_rx) = watch::channel(false);

        let seeder = node(tracker_addr);
        let payload = Arc::new(b"frame-0 frame-1 frame-2".to_vec());
        let advertised = seeder.seed("movie.mp4", payload.clone(), seed_rx).await.unwrap();
        wait_for_provider(&tracker, "movie.mp4").await;
        assert_eq!(tracker.get_peers("movie.mp4"), vec![advertised.clone()]);

        let leecher = node(tracker_addr);
        let (data, provider) = leecher.fetch("movie.mp4").await.unwrap();
        assert_eq!(data, *payload);
        assert_eq!(provider, advertised);

        let uploads = seeder.get_uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].file_name, "movie.mp4");

        seed_tx.send(true).unwrap();
        tracker_tx.send(true).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_unknown_file_has_no_providers() {
        let (_tracker, tracker_addr, tracker_tx) = start_tracker().await;
        let leecher = node(tracker_addr);
        assert!(matches!(leecher.fetch("missing.iso").await, Err(PeerError::NoProviders(name)) if name == "missing.iso"));
        tracker_tx.send(true).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_from_dead_provider_fails() {
        let (tracker, tracker_addr, tracker_tx) = start_tracker().await;

        // Reserve a port, then close it so nothing listens there.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead_port = listener.local_addr().unwrap().port();
        drop(listener);
        tracker.add_peer("movie.mp4", PeerAddress::new("127.0.0.1", dead_port), tokio::time::Instant::now());

        let leecher = node(tracker_addr);
        assert!(matches!(leecher.fetch("movie.mp4").await, Err(PeerError::AllProvidersFailed(_))));
        tracker_tx.send(true).unwrap();
    }

    #[tokio::test]
    async fn test_seeder_keeps_itself_alive() {
        let (tracker, tracker_addr, tracker_tx) = start_tracker().await;
        let (seed_tx, seed_rx) = watch::channel(false);
        let seeder = PeerNode::new(TrackerClient::new(tracker_addr, Duration::from_secs(2)), "127.0.0.1:0", Duration::from_millis(50));
        let advertised = seeder.seed("movie.mp4", Arc::new(vec![1, 2, 3]), seed_rx).await.unwrap();
        wait_for_provider(&tracker, "movie.mp4").await;

        let first_seen = tracker.last_seen(&advertised).unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(tracker.last_seen(&advertised).unwrap() > first_seen);

        seed_tx.send(true).unwrap();
        tracker_tx.send(true).unwrap();
    }

    #[test]
    fn test_peer_error_display() {
        assert_eq!(PeerError::NoProviders(String::from("movie.mp4")).to_string(), "no peers found for movie.mp4");
        assert_eq!(PeerError::AllProvidersFailed(String::from("movie.mp4")).to_string(), "every provider of movie.mp4 failed");
    }

    mod peer_console_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::sync::watch;
        use crate::client::structs::tracker_client::TrackerClient;
        use crate::peer::enums::peer_console_command::PeerConsoleCommand;
        use crate::peer::peer_console::{peer_console_loop, peer_console_render, render_uploads, PEER_CONSOLE_HELP};
        use crate::peer::structs::peer_node::PeerNode;
        use crate::peer::structs::upload_record::UploadRecord;
        use crate::protocol::structs::peer_address::PeerAddress;

        fn seeder_with_uploads() -> Arc<PeerNode> {
            let node = PeerNode::new(TrackerClient::new("127.0.0.1:6771".parse().unwrap(), Duration::from_secs(1)), "127.0.0.1:0", Duration::from_secs(1));
            node.uploads.write().push(UploadRecord {
                timestamp: 1700000000,
                peer: PeerAddress::new("127.0.0.1", 50123),
                file_name: String::from("movie.mp4"),
            });
            Arc::new(node)
        }

        #[test]
        fn test_parse_peer_commands() {
            assert_eq!("uploads".parse::<PeerConsoleCommand>().unwrap(), PeerConsoleCommand::Uploads);
            assert_eq!(" request   logs ".parse::<PeerConsoleCommand>().unwrap(), PeerConsoleCommand::Uploads);
            assert_eq!("help".parse::<PeerConsoleCommand>().unwrap(), PeerConsoleCommand::Help);
            assert_eq!("quit".parse::<PeerConsoleCommand>().unwrap(), PeerConsoleCommand::Quit);
            assert_eq!("files".parse::<PeerConsoleCommand>().unwrap(), PeerConsoleCommand::Invalid(String::from("files")));
        }

        #[test]
        fn test_render_uploads() {
            assert_eq!(render_uploads(&[]), "no uploads served");
            let node = seeder_with_uploads();
            assert_eq!(peer_console_render(&node, &PeerConsoleCommand::Uploads), "1700000000 upload movie.mp4 127.0.0.1:50123");
            assert_eq!(peer_console_render(&node, &PeerConsoleCommand::Help), PEER_CONSOLE_HELP);
        }

        #[tokio::test]
        async fn test_peer_console_lists_uploads_until_quit() {
            let (tx, rx) = watch::channel(false);
            let mut output: Vec<u8> = Vec::new();
            let input: &[u8] = b"request logs\nbogus\nquit\nhelp\n";
            peer_console_loop(seeder_with_uploads(), input, &mut output, tx, rx.clone()).await.unwrap();

            assert_eq!(String::from_utf8(output).unwrap(), "1700000000 upload movie.mp4 127.0.0.1:50123\ninvalid command\n");
            assert!(*rx.borrow());
        }
    }
}
