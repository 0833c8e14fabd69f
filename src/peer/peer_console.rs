use std::sync::Arc;
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::sync::watch;
use crate::console::console::console_lines;
use crate::peer::enums::peer_console_command::PeerConsoleCommand;
use crate::peer::structs::peer_node::PeerNode;
use crate::peer::structs::upload_record::UploadRecord;

pub const PEER_CONSOLE_HELP: &str = "commands: uploads | help | quit";

pub fn render_uploads(uploads: &[UploadRecord]) -> String
{
    if uploads.is_empty() {
        return String::from("no uploads served");
    }
    uploads.iter()
        .map(|record| format!("{} upload {} {}", record.timestamp, record.file_name, record.peer))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Text shown for `command`; `Quit` renders as an empty string.
pub fn peer_console_render(node: &PeerNode, command: &PeerConsoleCommand) -> String
{
    match command {
        PeerConsoleCommand::Uploads => render_uploads(&node.get_uploads()),
        PeerConsoleCommand::Help => String::from(PEER_CONSOLE_HELP),
        PeerConsoleCommand::Quit => String::new(),
        PeerConsoleCommand::Invalid(_) => String::from("invalid command"),
    }
}

/// Answers peer console commands from `reader` on `writer`; `quit` flips `shutdown_tx`.
pub async fn peer_console_loop<R, W>(node: Arc<PeerNode>, reader: R, writer: W, shutdown_tx: watch::Sender<bool>, shutdown_rx: watch::Receiver<bool>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console_lines(reader, writer, shutdown_tx, shutdown_rx, |line| {
        let command: PeerConsoleCommand = match line.parse() {
            Ok(command) => command,
            Err(never) => match never {},
        };
        match command {
            PeerConsoleCommand::Quit => None,
            command => Some(peer_console_render(&node, &command))
        }
    }).await
}

pub async fn peer_console_service(node: Arc<PeerNode>, shutdown_tx: watch::Sender<bool>, shutdown_rx: watch::Receiver<bool>)
{
    info!("[PEER] Starting interactive console, type 'help' for commands");
    let reader = BufReader::new(tokio::io::stdin());
    if let Err(error) = peer_console_loop(node, reader, tokio::io::stdout(), shutdown_tx, shutdown_rx).await {
        warn!("[CONSOLE] Console stopped: {error}");
    }
}
