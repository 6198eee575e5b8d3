use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::ChamberError;
use crate::models::{ChamberConfiguration, ReferenceItem, ReferenceKind};
use crate::repository::ChamberRepository;

/// Load/save orchestration over a [`ChamberRepository`].
///
/// Failure policy is report-and-abort: errors are logged and returned,
/// the caller keeps its in-memory configuration and may resubmit.
pub struct ChamberService<R: ChamberRepository> {
    repository: R,
}

impl<R: ChamberRepository> ChamberService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load an existing chamber configuration for editing.
    pub async fn load_chamber(&self, chamber_id: Uuid) -> Result<ChamberConfiguration, ChamberError> {
        debug!("Loading chamber configuration: {}", chamber_id);

        self.repository.load(chamber_id).await.map_err(|e| {
            error!("Failed to load chamber {}: {}", chamber_id, e);
            e
        })
    }

    /// Validate and persist a configuration wholesale (last write wins).
    /// Nothing reaches the repository if validation fails.
    pub async fn save_chamber(&self, config: &ChamberConfiguration) -> Result<Uuid, ChamberError> {
        debug!("Saving chamber configuration: {}", config.id);

        config.validate()?;

        match self.repository.save(config).await {
            Ok(chamber_id) => {
                info!("Chamber configuration {} saved", chamber_id);
                Ok(chamber_id)
            }
            Err(e) => {
                error!("Failed to save chamber {}: {}", config.id, e);
                Err(e)
            }
        }
    }

    /// Static id/label pairs for populating selection controls.
    pub async fn reference_list(&self, kind: ReferenceKind) -> Result<Vec<ReferenceItem>, ChamberError> {
        debug!("Fetching reference list: {:?}", kind);

        self.repository.list_reference(kind).await
    }
}
