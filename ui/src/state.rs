use std::sync::Arc;

use log::warn;
use tiffin_business::{
    ApiClient, BusinessConfig, DashboardData, DataLoader, FetchService, Resource,
};

/// Everything the shell keeps between frames apart from navigation.
#[derive(Debug)]
pub struct State {
    pub client: ApiClient,
    pub data: DashboardData,
    loader: DataLoader,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::init().unwrap_or_else(|err| {
            warn!("Invalid configuration, using defaults: {err}");
            BusinessConfig::default()
        });
        Self::from_client(ApiClient::new(config))
    }
}

impl State {
    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        Self::from_client(ApiClient::with_fetcher(config, fetcher))
    }

    fn from_client(client: ApiClient) -> Self {
        Self {
            client,
            data: DashboardData::default(),
            loader: DataLoader::default(),
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        self.client.config()
    }

    pub fn load_all(&mut self) {
        self.loader.load_all(&self.client, &mut self.data);
    }

    pub fn refresh(&mut self, resource: Resource) {
        self.loader.refresh(&self.client, &mut self.data, resource);
    }

    /// Applies finished list fetches. Returns `true` if anything changed.
    pub fn poll(&mut self) -> bool {
        self.loader.poll(&mut self.data)
    }

    pub fn is_loading(&self) -> bool {
        Resource::LISTS
            .into_iter()
            .chain([Resource::Settings])
            .any(|resource| self.data.is_loading(resource))
    }
}
