use std::sync::Arc;

use crate::api::{ApiClient, ResourceApi};
use crate::config::{self, AppConfig};
use crate::prompt::{Notifier, TerminalNotifier};
use crate::session::{FileStorage, MockAuthenticator, SessionStore, Storage};

/// Everything a command needs, wired once per invocation.
pub struct AppContext {
    pub config: AppConfig,
    pub api: Arc<dyn ResourceApi>,
    pub session: Arc<SessionStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    pub fn from_env(api_url: Option<&str>) -> anyhow::Result<Self> {
        let mut config = config::config().clone();
        if let Some(raw) = api_url {
            config = config.with_api_url(raw)?;
        }

        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(config.storage_dir()?));
        let api: Arc<dyn ResourceApi> = Arc::new(ApiClient::new(config.api.base_url.clone()));
        let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier::new());

        Ok(Self::new(config, api, storage, notifier))
    }

    pub fn new(
        config: AppConfig,
        api: Arc<dyn ResourceApi>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = Arc::new(SessionStore::open(
            Arc::new(MockAuthenticator::new()),
            storage,
            notifier.clone(),
        ));

        tracing::debug!("Using portfolio API at {}", config.api.base_url);
        Self {
            config,
            api,
            session,
            notifier,
        }
    }
}
