use std::collections::HashSet;

use thiserror::Error;

use crate::domain::client::ClientRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSourceError {
    Unavailable,
    InvalidData,
    Unknown,
}

/// Anything that can hand over the agent's client directory.
pub trait ClientSource {
    fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientSourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientDirectoryError {
    #[error("client directory is temporarily unavailable")]
    TemporarilyUnavailable,
    #[error("client directory returned malformed data: {details}")]
    DataContractViolation { details: String },
}

/// Loads the directory and rejects records the query layer cannot handle.
pub fn load_directory(
    source: &dyn ClientSource,
) -> Result<Vec<ClientRecord>, ClientDirectoryError> {
    let clients = source.list_clients().map_err(map_source_error)?;

    let mut seen = HashSet::with_capacity(clients.len());
    for client in &clients {
        if client.id.trim().is_empty() {
            return Err(violation("client id must not be empty"));
        }
        if !seen.insert(client.id.as_str()) {
            return Err(violation(format!("duplicate client id {}", client.id)));
        }
        if client.protection_score > 100 {
            return Err(violation(format!(
                "protection score {} of client {} is above 100",
                client.protection_score, client.id
            )));
        }
    }

    tracing::debug!(count = clients.len(), "client directory loaded");
    Ok(clients)
}

fn map_source_error(error: ClientSourceError) -> ClientDirectoryError {
    match error {
        ClientSourceError::Unavailable | ClientSourceError::Unknown => {
            ClientDirectoryError::TemporarilyUnavailable
        }
        ClientSourceError::InvalidData => violation("source rejected its own payload"),
    }
}

fn violation(details: impl Into<String>) -> ClientDirectoryError {
    ClientDirectoryError::DataContractViolation {
        details: details.into(),
    }
}
