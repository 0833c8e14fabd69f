use std::fs::File;
use std::io::Write;
use std::net::{IpAddr, SocketAddr};
use log::warn;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_trackers_config::ApiTrackersConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                peers_timeout: 10,
                peers_cleanup_interval: 5,
                interactive_console: true,
            },
            udp_server: vec!(
                UdpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("127.0.0.1:6771"),
                    threads: 1,
                    receive_buffer_size: 0,
                    send_buffer_size: 0,
                    reuse_address: true,
                }
            ),
            api_server: vec!(
                ApiTrackersConfig {
                    enabled: false,
                    bind_address: String::from("127.0.0.1:8080"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: 2,
                }
            ),
            peer_config: PeerConfig {
                tracker_address: String::from("127.0.0.1:6771"),
                listen_address: String::from("127.0.0.1:0"),
                request_timeout: 5,
                keep_alive_interval: 2,
                interactive_console: true,
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, ConfigurationError> {
        Ok(toml::from_str(&String::from_utf8_lossy(data))?)
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Self::load(data.as_slice())
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// When the file is missing or broken and `create` is set, a default file
    /// is written and `ConfigurationError::Created` is returned so the operator
    /// can review it before starting again.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(ConfigurationError::NotCreated(path.to_string()));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(ConfigurationError::Created(path.to_string()))
                    }
                    Err(error) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        Err(error)
                    }
                };
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;

        let check_positive = vec![
            ("[tracker_config] peers_timeout", self.tracker_config.peers_timeout),
            ("[tracker_config] peers_cleanup_interval", self.tracker_config.peers_cleanup_interval),
            ("[peer_config] request_timeout", self.peer_config.request_timeout),
            ("[peer_config] keep_alive_interval", self.peer_config.keep_alive_interval),
        ];
        for (name, value) in check_positive {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be greater than zero")));
            }
        }

        for udp_server in self.udp_server.iter().filter(|server| server.enabled) {
            Self::validate_socket_address("[udp_server] bind_address", &udp_server.bind_address)?;
            if udp_server.threads == 0 {
                return Err(ConfigurationError::ValidationError(format!("[udp_server] {} needs at least one thread", udp_server.bind_address)));
            }
        }
        for api_server in self.api_server.iter().filter(|server| server.enabled) {
            Self::validate_socket_address("[api_server] bind_address", &api_server.bind_address)?;
        }
        Self::validate_socket_address("[peer_config] tracker_address", &self.peer_config.tracker_address)?;
        Self::validate_value("[peer_config] listen_address", &self.peer_config.listen_address, r"^\S+:\d{1,5}$")?;
        Self::validate_dialable("[peer_config] tracker_address", &self.peer_config.tracker_address)?;
        Self::validate_dialable("[peer_config] listen_address", &self.peer_config.listen_address)?;

        if self.peer_config.keep_alive_interval >= self.tracker_config.peers_timeout {
            warn!(
                "[VALIDATE] keep_alive_interval ({}s) is not below peers_timeout ({}s), peers may be evicted between heartbeats",
                self.peer_config.keep_alive_interval, self.tracker_config.peers_timeout
            );
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("{name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }

    /// Peers dial these addresses, so a wildcard host like `0.0.0.0` or `[::]` is refused.
    fn validate_dialable(name: &str, value: &str) -> Result<(), ConfigurationError>
    {
        let host = value.rsplit_once(':').map(|(host, _)| host).unwrap_or(value);
        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.parse::<IpAddr>().is_ok_and(|ip| ip.is_unspecified()) {
            return Err(ConfigurationError::ValidationError(format!("{name} [:] Value: \"{value}\" [:] wildcard host cannot be reached by peers")));
        }
        Ok(())
    }

    fn validate_socket_address(name: &str, value: &str) -> Result<(), ConfigurationError>
    {
        value.parse::<SocketAddr>()
            .map(|_| ())
            .map_err(|error| ConfigurationError::ValidationError(format!("{name} [:] Value: \"{value}\" [:] {error}")))
    }
}
