use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the TOML config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Overrides the bind address of the first UDP server.
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Shares and fetches whole files through a rendezvous tracker", long_about = None)]
pub struct PeerCli {
    /// Path of the TOML config file, `[peer_config]` is used.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Overrides `peer_config.tracker_address`.
    #[arg(long)]
    pub tracker: Option<String>,
    /// Overrides `peer_config.listen_address`.
    #[arg(long)]
    pub listen: Option<String>,
    #[command(subcommand)]
    pub command: PeerCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PeerCommand {
    /// Seed a local file until interrupted.
    Share {
        path: String,
    },
    /// Fetch a file by name, then seed it.
    Get {
        file_name: String,
        /// Where to write the file, defaults to the file name.
        #[arg(long)]
        output: Option<String>,
        /// Exit after the download instead of seeding.
        #[arg(long)]
        no_seed: bool,
    },
}
