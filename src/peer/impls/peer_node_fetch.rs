use log::{info, warn};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_node::PeerNode;
use crate::protocol::structs::peer_address::PeerAddress;

impl PeerNode {
    /// Downloads `file_name` from the first provider that delivers it.
    #[tracing::instrument(level = "debug")]
    pub async fn fetch(&self, file_name: &str) -> Result<(Vec<u8>, PeerAddress), PeerError>
    {
        let providers = self.client.get_peers(file_name).await?;
        if providers.is_empty() {
            return Err(PeerError::NoProviders(file_name.to_string()));
        }

        for provider in providers {
            match self.download(&provider).await {
                Ok(data) => {
                    info!("[PEER] Downloaded {file_name} ({} bytes) from {provider}", data.len());
                    return Ok((data, provider));
                }
                Err(error) => {
                    warn!("[PEER] Download of {file_name} from {provider} failed: {error}");
                }
            }
        }

        Err(PeerError::AllProvidersFailed(file_name.to_string()))
    }

    pub async fn download(&self, provider: &PeerAddress) -> Result<Vec<u8>, PeerError>
    {
        let connect = TcpStream::connect((provider.host.as_str(), provider.port));
        let mut stream = tokio::time::timeout(self.client.request_timeout, connect).await
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::TimedOut, format!("connecting to {provider} timed out")))??;

        let mut data = Vec::new();
        stream.read_to_end(&mut data).await?;
        Ok(data)
    }
}
