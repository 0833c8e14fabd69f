#[cfg(test)]
mod tracker_tests {
    mod peer_registry_tests {
        use crate::protocol::structs::peer_address::PeerAddress;
        use crate::tracker::structs::peer_registry::PeerRegistry;

        #[test]
        fn test_add_peer_is_idempotent() {
            let mut registry = PeerRegistry::new();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            assert!(registry.add_peer("movie.mp4", peer.clone()));
            assert!(!registry.add_peer("movie.mp4", peer.clone()));
            assert_eq!(registry.lookup("movie.mp4"), vec![peer]);
        }

        #[test]
        fn test_lookup_unknown_file_is_empty() {
            let registry = PeerRegistry::new();
            assert!(registry.lookup("missing").is_empty());
            assert!(!registry.contains_file("missing"));
        }

        #[test]
        fn test_remove_peer_from_every_file() {
            let mut registry = PeerRegistry::new();
            let alice = PeerAddress::new("127.0.0.1", 9001);
            let bob = PeerAddress::new("127.0.0.1", 9002);
            registry.add_peer("a", alice.clone());
            registry.add_peer("b", alice.clone());
            registry.add_peer("b", bob.clone());

            assert_eq!(registry.remove_peer(&alice), 2);
            assert!(!registry.contains_file("a"));
            assert_eq!(registry.lookup("b"), vec![bob]);
            assert_eq!(registry.file_count(), 1);
        }

        #[test]
        fn test_remove_unknown_peer() {
            let mut registry = PeerRegistry::new();
            registry.add_peer("a", PeerAddress::new("127.0.0.1", 1));
            assert_eq!(registry.remove_peer(&PeerAddress::new("127.0.0.1", 2)), 0);
            assert_eq!(registry.file_count(), 1);
        }

        #[test]
        fn test_peer_count_is_distinct() {
            let mut registry = PeerRegistry::new();
            let alice = PeerAddress::new("127.0.0.1", 9001);
            registry.add_peer("a", alice.clone());
            registry.add_peer("b", alice);
            registry.add_peer("b", PeerAddress::new("10.0.0.1", 9001));
            assert_eq!(registry.peer_count(), 2);
        }

        #[test]
        fn test_same_host_different_port_are_distinct() {
            let mut registry = PeerRegistry::new();
            registry.add_peer("a", PeerAddress::new("127.0.0.1", 9001));
            registry.add_peer("a", PeerAddress::new("127.0.0.1", 9002));
            assert_eq!(registry.lookup("a").len(), 2);
        }
    }

    mod tracker_state_tests {
        use std::time::Duration;
        use tokio::time::Instant;
        use crate::protocol::structs::peer_address::PeerAddress;
        use crate::tracker::structs::tracker_state::TrackerState;

        #[test]
        fn test_share_stamps_and_snapshots() {
            let mut state = TrackerState::new();
            let now = Instant::now();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            let snapshot = state.share("movie.mp4", peer.clone(), now);
            assert_eq!(snapshot, vec![peer.clone()]);
            assert_eq!(state.last_seen.get(&peer), Some(&now));
        }

        #[test]
        fn test_expiry_threshold_is_strict() {
            let mut state = TrackerState::new();
            let start = Instant::now();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            state.touch(peer.clone(), start);

            let timeout = Duration::from_secs(10);
            assert!(!state.is_expired(&peer, start + timeout, timeout));
            assert!(state.is_expired(&peer, start + timeout + Duration::from_millis(1), timeout));
            assert_eq!(state.expired_peers(start + Duration::from_secs(11), timeout), vec![peer]);
        }

        #[test]
        fn test_now_before_last_seen_is_not_expired() {
            let mut state = TrackerState::new();
            let start = Instant::now();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            state.touch(peer.clone(), start + Duration::from_secs(5));
            assert!(!state.is_expired(&peer, start, Duration::from_secs(1)));
        }

        #[test]
        fn test_evict_clears_both_tables() {
            let mut state = TrackerState::new();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            state.share("a", peer.clone(), Instant::now());
            assert_eq!(state.evict(&peer), 1);
            assert!(state.last_seen.is_empty());
            assert_eq!(state.registry.file_count(), 0);
        }
    }

    mod file_tracker_tests {
        use std::net::SocketAddr;
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::time::Instant;
        use crate::config::structs::configuration::Configuration;
        use crate::protocol::structs::peer_address::PeerAddress;
        use crate::tracker::enums::tracker_error::TrackerError;
        use crate::tracker::structs::file_tracker::FileTracker;

        fn tracker() -> FileTracker {
            FileTracker::new(Arc::new(Configuration::init()))
        }

        fn sender() -> SocketAddr {
            "127.0.0.1:50000".parse().unwrap()
        }

        #[test]
        fn test_share_then_get() {
            let tracker = tracker();
            let now = Instant::now();
            assert!(tracker.handle_packet_at(sender(), br#"{"action":"share","file_name":"movie.mp4","peer":["127.0.0.1",9001]}"#, now).is_none());

            let response = tracker.handle_packet_at(sender(), br#"{"action":"get","file_name":"movie.mp4","request_id":5}"#, now).unwrap();
            assert_eq!(response.peers, vec![PeerAddress::new("127.0.0.1", 9001)]);
            assert_eq!(response.request_id, Some(5));
        }

        #[test]
        fn test_get_unknown_file_is_empty_success() {
            let tracker = tracker();
            let response = tracker.handle_packet(sender(), br#"{"action":"get","file_name":"nothing"}"#).unwrap();
            assert!(response.peers.is_empty());
            assert_eq!(response.request_id, None);

            let requests = tracker.get_requests();
            assert_eq!(requests.len(), 1);
            assert!(requests[0].success);
            assert_eq!(requests[0].requester, PeerAddress::from(sender()));
        }

        #[test]
        fn test_share_record_uses_announced_peer() {
            let tracker = tracker();
            tracker.handle_packet(sender(), br#"{"action":"share","file_name":"a","peer":["10.1.1.1",7000]}"#);
            let record = &tracker.get_requests()[0];
            assert_eq!(record.requester, PeerAddress::new("10.1.1.1", 7000));
            assert_eq!(record.action.as_deref(), Some("share"));
            assert_eq!(record.peers_for_file, vec![PeerAddress::new("10.1.1.1", 7000)]);
        }

        #[test]
        fn test_keep_alive_touches_only_last_seen() {
            let tracker = tracker();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            assert!(tracker.handle_packet(sender(), br#"{"action":"keep_alive","peer":["127.0.0.1",9001]}"#).is_none());
            assert!(tracker.last_seen(&peer).is_some());
            assert!(tracker.dump().is_empty());
            assert_eq!(tracker.request_count(), 0);
            assert_eq!(tracker.get_stats().keep_alives_handled, 1);
        }

        #[test]
        fn test_keep_alive_with_stray_field_still_refreshes() {
            let tracker = tracker();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            tracker.handle_packet(sender(), br#"{"action":"keep_alive","peer":["127.0.0.1",9001],"file_name":5}"#);
            assert!(tracker.last_seen(&peer).is_some());
            assert_eq!(tracker.request_count(), 0);
            assert_eq!(tracker.get_stats().invalid_requests, 0);
        }

        #[test]
        fn test_malformed_datagram_logs_one_failure() {
            let tracker = tracker();
            assert!(tracker.handle_packet(sender(), b"\xff\xfe not json").is_none());
            let requests = tracker.get_requests();
            assert_eq!(requests.len(), 1);
            assert!(!requests[0].success);
            assert!(requests[0].peers_for_file.is_empty());
            assert_eq!(requests[0].requester, PeerAddress::from(sender()));
            assert_eq!(tracker.get_stats().invalid_requests, 1);
        }

        #[test]
        fn test_unknown_action_keeps_readable_fields() {
            let tracker = tracker();
            tracker.handle_packet(sender(), br#"{"action":"delete","file_name":"a","peer":["127.0.0.1",1]}"#);
            let record = &tracker.get_requests()[0];
            assert!(!record.success);
            assert_eq!(record.action.as_deref(), Some("delete"));
            assert_eq!(record.file_name.as_deref(), Some("a"));
            assert_eq!(record.requester, PeerAddress::new("127.0.0.1", 1));
        }

        #[test]
        fn test_file_report() {
            let tracker = tracker();
            let peer = PeerAddress::new("127.0.0.1", 9001);
            tracker.add_peer("a", peer.clone(), Instant::now());
            assert_eq!(tracker.get_file_report("a"), Ok(vec![peer]));
            assert_eq!(tracker.get_file_report("b"), Err(TrackerError::UnknownFile(String::from("b"))));
            assert_eq!(TrackerError::UnknownFile(String::from("b")).to_string(), "no such file: b");
        }

        #[test]
        fn test_sweep_evicts_stale_peers_only() {
            let tracker = tracker();
            let start = Instant::now();
            let timeout = Duration::from_secs(10);
            let stale = PeerAddress::new("127.0.0.1", 9001);
            let fresh = PeerAddress::new("127.0.0.1", 9002);
            tracker.add_peer("a", stale.clone(), start);
            tracker.add_peer("b", stale.clone(), start);
            tracker.add_peer("b", fresh.clone(), start + Duration::from_secs(8));

            let stats = tracker.sweep_expired(start + Duration::from_secs(11), timeout);
            assert_eq!(stats.peers_evicted, 1);
            assert_eq!(stats.files_removed, 1);
            assert!(tracker.get_peers("a").is_empty());
            assert_eq!(tracker.get_peers("b"), vec![fresh]);
            assert_eq!(tracker.last_seen(&stale), None);
            assert_eq!(tracker.get_stats().peers_evicted, 1);
        }

        #[test]
        fn test_keep_alive_postpones_eviction() {
            let tracker = tracker();
            let start = Instant::now();
            let timeout = Duration::from_secs(10);
            let peer = PeerAddress::new("127.0.0.1", 9001);
            tracker.add_peer("a", peer.clone(), start);
            tracker.keep_alive(peer.clone(), start + Duration::from_secs(6));

            assert_eq!(tracker.sweep_expired(start + Duration::from_secs(12), timeout).peers_evicted, 0);
            assert_eq!(tracker.get_peers("a"), vec![peer.clone()]);
            assert_eq!(tracker.sweep_expired(start + Duration::from_secs(17), timeout).peers_evicted, 1);
            assert!(tracker.get_peers("a").is_empty());
        }

        #[test]
        fn test_keep_alive_between_sweep_passes_spares_peer() {
            let tracker = tracker();
            let start = Instant::now();
            let timeout = Duration::from_secs(10);
            let peer = PeerAddress::new("127.0.0.1", 9001);
            tracker.add_peer("a", peer.clone(), start);

            let now = start + Duration::from_secs(11);
            let candidates = tracker.collect_expired(now, timeout);
            assert_eq!(candidates, vec![peer.clone()]);

            tracker.keep_alive(peer.clone(), now);
            let stats = tracker.evict_expired(candidates, now, timeout);
            assert_eq!(stats.peers_evicted, 0);
            assert_eq!(stats.files_removed, 0);
            assert_eq!(tracker.get_peers("a"), vec![peer.clone()]);
            assert_eq!(tracker.last_seen(&peer), Some(now));
            assert_eq!(tracker.get_stats().peers_evicted, 0);
        }

        #[test]
        fn test_peer_evicted_between_sweep_passes_is_skipped() {
            let tracker = tracker();
            let start = Instant::now();
            let timeout = Duration::from_secs(10);
            let peer = PeerAddress::new("127.0.0.1", 9001);
            tracker.add_peer("a", peer.clone(), start);

            let now = start + Duration::from_secs(11);
            let candidates = tracker.collect_expired(now, timeout);
            assert_eq!(tracker.sweep_expired(now, timeout).peers_evicted, 1);
            assert_eq!(tracker.evict_expired(candidates, now, timeout).peers_evicted, 0);
            assert_eq!(tracker.get_stats().peers_evicted, 1);
        }

        #[test]
        fn test_keep_alive_only_peer_is_swept_without_registry_change() {
            let tracker = tracker();
            let start = Instant::now();
            tracker.keep_alive(PeerAddress::new("127.0.0.1", 9001), start);
            let stats = tracker.sweep_expired(start + Duration::from_secs(20), Duration::from_secs(10));
            assert_eq!(stats.peers_evicted, 1);
            assert_eq!(stats.files_removed, 0);
            assert_eq!(tracker.get_stats().tracked_peers, 0);
        }
    }

    mod sweep_loop_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::sync::watch;
        use tokio::time::Instant;
        use crate::config::structs::configuration::Configuration;
        use crate::protocol::structs::peer_address::PeerAddress;
        use crate::tracker::structs::file_tracker::FileTracker;

        #[tokio::test(start_paused = true)]
        async fn test_sweep_loop_evicts_after_timeout() {
            let tracker = Arc::new(FileTracker::new(Arc::new(Configuration::init())));
            let peer = PeerAddress::new("127.0.0.1", 9001);
            tracker.add_peer("movie.mp4", peer.clone(), Instant::now());

            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let sweeper = tracker.clone();
            let handle = tokio::spawn(async move { sweeper.sweep_loop(shutdown_rx).await });

            tokio::time::sleep(Duration::from_millis(9_900)).await;
            assert_eq!(tracker.get_peers("movie.mp4"), vec![peer]);

            // Sweeps run at 5s, 10s and 15s; the one at 15s sees 15s of silence.
            tokio::time::sleep(Duration::from_secs(6)).await;
            assert!(tracker.get_peers("movie.mp4").is_empty());
            assert!(tracker.get_stats().timestamp_run_sweep > 0);

            shutdown_tx.send(true).unwrap();
            handle.await.unwrap();
        }

        #[tokio::test(start_paused = true)]
        async fn test_sweep_loop_stops_on_shutdown() {
            let tracker = Arc::new(FileTracker::new(Arc::new(Configuration::init())));
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let sweeper = tracker.clone();
            let handle = tokio::spawn(async move { sweeper.sweep_loop(shutdown_rx).await });
            shutdown_tx.send(true).unwrap();
            handle.await.unwrap();
        }
    }
}
