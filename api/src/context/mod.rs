use std::{sync::Arc, time::Duration};

use keysmith_issuer::IssuanceService;
use tokio::sync::Semaphore;

use crate::config::KeysmithApiConfig;

#[derive(Debug, Clone)]
pub struct ApiContext {
    pub config: KeysmithApiConfig,
    pub issuer: IssuanceService,
    pub issuance_permits: Arc<Semaphore>,
    pub issue_timeout: Duration,
}

impl ApiContext {
    pub fn new(config: KeysmithApiConfig) -> Self {
        Self::with_issuer(config, IssuanceService::default())
    }

    pub fn with_issuer(config: KeysmithApiConfig, issuer: IssuanceService) -> Self {
        let permits = config.max_concurrent_issuances as usize;
        let issue_timeout = config.issue_timeout();

        Self {
            config,
            issuer,
            issuance_permits: Arc::new(Semaphore::new(permits)),
            issue_timeout,
        }
    }

    /// Stop handing out issuance slots. Issuances already running finish;
    /// anything still waiting for a slot is turned away.
    pub fn close_issuance(&self) {
        self.issuance_permits.close();
    }
}
