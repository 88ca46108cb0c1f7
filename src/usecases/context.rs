use crate::{domain::client::ClientRecord, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub clients: Vec<ClientRecord>,
}

impl AppContext {
    pub fn new(config: AppConfig, clients: Vec<ClientRecord>) -> Self {
        Self { config, clients }
    }
}
