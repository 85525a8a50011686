use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Asset, AssetStatus, AssetType, CreateAsset};
use crate::store::AssetStore;
use crate::validation::{validate_new_asset, validate_status_transition};

/// Asset use cases. Validation runs first, then the store.
#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn AssetStore>,
}

impl AssetService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: &CreateAsset) -> AppResult<Asset> {
        let new_asset = validate_new_asset(input).map_err(|errors| {
            warn!(fields = ?errors.keys().collect::<Vec<_>>(), "Rejected invalid asset");
            AppError::Validation(errors)
        })?;

        // Fast path only; the store's unique constraint is what actually
        // guarantees uniqueness under concurrent creates.
        if self
            .store
            .find_by_serial_number(&new_asset.serial_number)
            .await?
            .is_some()
        {
            warn!(serial_number = %new_asset.serial_number, "Duplicate serial number");
            return Err(AppError::DuplicateSerialNumber(new_asset.serial_number));
        }

        let asset = self.store.insert(&new_asset).await?;
        info!(id = asset.id, serial_number = %asset.serial_number, "Created asset");
        Ok(asset)
    }

    /// Filter precedence: type+status, type, status, search, everything.
    ///
    /// An unrecognized type or status yields an empty list rather than an
    /// error, unlike creation where the same values are rejected.
    pub async fn list(
        &self,
        asset_type: Option<&str>,
        status: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<Asset>> {
        let assets = match (asset_type, status) {
            (Some(t), Some(s)) => match (t.parse::<AssetType>(), s.parse::<AssetStatus>()) {
                (Ok(t), Ok(s)) => self.store.find_by_type_and_status(t, s).await?,
                _ => Vec::new(),
            },
            (Some(t), None) => match t.parse::<AssetType>() {
                Ok(t) => self.store.find_by_type(t).await?,
                Err(_) => Vec::new(),
            },
            (None, Some(s)) => match s.parse::<AssetStatus>() {
                Ok(s) => self.store.find_by_status(s).await?,
                Err(_) => Vec::new(),
            },
            (None, None) => match search {
                Some(needle) if !needle.is_empty() => {
                    self.store
                        .find_by_name_or_serial_containing_ignore_case(needle)
                        .await?
                }
                _ => self.store.find_all().await?,
            },
        };

        debug!(
            ?asset_type,
            ?status,
            ?search,
            count = assets.len(),
            "Listed assets"
        );
        Ok(assets)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Asset> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Moves an asset to `new_status`. The assignee is kept only for
    /// ASSIGNED and cleared for every other status.
    pub async fn update_status(
        &self,
        id: i64,
        new_status: &str,
        assigned_to: Option<&str>,
    ) -> AppResult<Asset> {
        let mut asset = self.get_by_id(id).await?;
        let status = validate_status_transition(new_status, assigned_to)?;

        let previous = asset.status;
        asset.status = status;
        asset.assigned_to = if status == AssetStatus::Assigned {
            assigned_to.map(str::to_string)
        } else {
            None
        };

        let updated = self.store.save(&asset).await?;
        info!(id, from = %previous, to = %updated.status, "Updated asset status");
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        if !self.store.delete_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }
        info!(id, "Deleted asset");
        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.store.count().await
    }
}
