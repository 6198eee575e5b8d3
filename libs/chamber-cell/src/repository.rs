use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Method;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::PracticeApiClient;

use crate::error::ChamberError;
use crate::models::{ChamberConfiguration, ReferenceItem, ReferenceKind};

/// Persistence boundary for chamber configurations. Implementations must
/// not retry: a failed call is reported to the caller and aborted.
#[async_trait]
pub trait ChamberRepository: Send + Sync {
    async fn load(&self, chamber_id: Uuid) -> Result<ChamberConfiguration, ChamberError>;

    /// Wholesale replace of the stored configuration, last write wins.
    async fn save(&self, config: &ChamberConfiguration) -> Result<Uuid, ChamberError>;

    async fn list_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceItem>, ChamberError>;
}

/// Repository backed by the external practice-management API.
pub struct HttpChamberRepository {
    client: PracticeApiClient,
}

impl HttpChamberRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: PracticeApiClient::new(config),
        }
    }
}

#[async_trait]
impl ChamberRepository for HttpChamberRepository {
    async fn load(&self, chamber_id: Uuid) -> Result<ChamberConfiguration, ChamberError> {
        let path = format!("/api/v1/chambers/{}", chamber_id);
        self.client
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| ChamberError::Persistence(e.to_string()))
    }

    async fn save(&self, config: &ChamberConfiguration) -> Result<Uuid, ChamberError> {
        let path = format!("/api/v1/chambers/{}", config.id);
        let body = serde_json::to_value(config)?;

        let stored: ChamberConfiguration = self
            .client
            .request(Method::PUT, &path, Some(body))
            .await
            .map_err(|e| ChamberError::Persistence(e.to_string()))?;

        Ok(stored.id)
    }

    async fn list_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceItem>, ChamberError> {
        let path = format!("/api/v1/reference/{}", kind.as_path_segment());
        self.client
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| ChamberError::Persistence(e.to_string()))
    }
}

/// In-memory store for tests and offline editing sessions.
#[derive(Default)]
pub struct InMemoryChamberRepository {
    chambers: RwLock<HashMap<Uuid, ChamberConfiguration>>,
    reference: RwLock<HashMap<ReferenceKind, Vec<ReferenceItem>>>,
}

impl InMemoryChamberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, config: ChamberConfiguration) {
        self.chambers.write().await.insert(config.id, config);
    }

    pub async fn set_reference(&self, kind: ReferenceKind, items: Vec<ReferenceItem>) {
        self.reference.write().await.insert(kind, items);
    }
}

#[async_trait]
impl ChamberRepository for InMemoryChamberRepository {
    async fn load(&self, chamber_id: Uuid) -> Result<ChamberConfiguration, ChamberError> {
        self.chambers
            .read()
            .await
            .get(&chamber_id)
            .cloned()
            .ok_or_else(|| ChamberError::NotFound(chamber_id.to_string()))
    }

    async fn save(&self, config: &ChamberConfiguration) -> Result<Uuid, ChamberError> {
        self.chambers.write().await.insert(config.id, config.clone());
        Ok(config.id)
    }

    async fn list_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceItem>, ChamberError> {
        Ok(self
            .reference
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }
}
