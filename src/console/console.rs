use std::sync::Arc;
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::watch;
use crate::common::common::shutdown_signalled;
use crate::console::enums::console_command::ConsoleCommand;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::tracker::structs::file_tracker::FileTracker;

pub const CONSOLE_HELP: &str = "commands: requests | files | file <name> | stats | help | quit";

fn join_peers(peers: &[PeerAddress]) -> String
{
    peers.iter().map(|peer| peer.to_string()).collect::<Vec<String>>().join(", ")
}

/// Text shown for `command`; `Quit` renders as an empty string.
pub fn render(tracker: &FileTracker, command: &ConsoleCommand) -> String
{
    match command {
        ConsoleCommand::Requests => {
            let requests = tracker.get_requests();
            if requests.is_empty() {
                return String::from("no requests logged");
            }
            requests.iter().map(|record| {
                format!(
                    "{} {} {} {} {} [{}]",
                    record.timestamp,
                    record.requester,
                    record.action.as_deref().unwrap_or("-"),
                    record.file_name.as_deref().unwrap_or("-"),
                    if record.success { "ok" } else { "failed" },
                    join_peers(&record.peers_for_file)
                )
            }).collect::<Vec<String>>().join("\n")
        }
        ConsoleCommand::Files => {
            let files = tracker.dump();
            if files.is_empty() {
                return String::from("no files shared");
            }
            files.iter()
                .map(|(file_name, peers)| format!("{file_name}: [{}]", join_peers(peers)))
                .collect::<Vec<String>>()
                .join("\n")
        }
        ConsoleCommand::File(file_name) => {
            match tracker.get_file_report(file_name) {
                Ok(peers) => format!("{file_name}: [{}]", join_peers(&peers)),
                Err(error) => error.to_string()
            }
        }
        ConsoleCommand::Stats => {
            serde_json::to_string_pretty(&tracker.get_stats()).unwrap_or_default()
        }
        ConsoleCommand::Help => String::from(CONSOLE_HELP),
        ConsoleCommand::Quit => String::new(),
        ConsoleCommand::Invalid(_) => String::from("invalid command"),
    }
}

/// Reads lines from `reader` and writes `answer(line)` to `writer` until `quit`, end of input or shutdown.
///
/// `answer` returns `None` for `quit`, which flips `shutdown_tx` so the rest of
/// the process stops as well. Blank lines are skipped.
pub async fn console_lines<R, W, F>(reader: R, mut writer: W, shutdown_tx: watch::Sender<bool>, mut shutdown_rx: watch::Receiver<bool>, mut answer: F) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: FnMut(&str) -> Option<String>,
{
    let mut lines = reader.lines();
    loop {
        let line = tokio::select! {
            _ = shutdown_signalled(&mut shutdown_rx) => {
                info!("[CONSOLE] Shutting down console...");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            info!("[CONSOLE] Input closed, console stopped");
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(mut output) = answer(&line) else {
            info!("[CONSOLE] Quit requested, shutting down...");
            if shutdown_tx.send(true).is_err() {
                warn!("[CONSOLE] Nothing is listening for shutdown");
            }
            return Ok(());
        };
        output.push('\n');
        writer.write_all(output.as_bytes()).await?;
        writer.flush().await?;
    }
}

/// Answers tracker console commands from `reader` on `writer`.
pub async fn console_loop<R, W>(tracker: Arc<FileTracker>, reader: R, writer: W, shutdown_tx: watch::Sender<bool>, shutdown_rx: watch::Receiver<bool>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console_lines(reader, writer, shutdown_tx, shutdown_rx, |line| {
        let command: ConsoleCommand = match line.parse() {
            Ok(command) => command,
            Err(never) => match never {},
        };
        match command {
            ConsoleCommand::Quit => None,
            command => Some(render(&tracker, &command))
        }
    }).await
}

/// Runs the console on the process stdin and stdout.
pub async fn console_service(tracker: Arc<FileTracker>, shutdown_tx: watch::Sender<bool>, shutdown_rx: watch::Receiver<bool>)
{
    info!("[BOOT] Starting interactive console, type 'help' for commands");
    let reader = BufReader::new(tokio::io::stdin());
    if let Err(error) = console_loop(tracker, reader, tokio::io::stdout(), shutdown_tx, shutdown_rx).await {
        warn!("[CONSOLE] Console stopped: {error}");
    }
}
