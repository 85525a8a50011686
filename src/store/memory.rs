use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::AssetStore;
use crate::error::{AppError, AppResult};
use crate::models::{Asset, AssetStatus, AssetType, NewAsset};

#[derive(Debug, Default)]
struct Inner {
    /// Last id handed out; ids are never reused, even after deletes.
    last_id: i64,
    /// IndexMap keeps insertion order, which is the order every query returns.
    assets: IndexMap<i64, Asset>,
}

/// In-process [`AssetStore`] used by tests and when no database is configured.
///
/// The serial-number check and the insert happen under the same write lock,
/// so two racing inserts can never both succeed.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    inner: RwLock<Inner>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Asset>
    where
        F: Fn(&Asset) -> bool,
    {
        self.inner
            .read()
            .await
            .assets
            .values()
            .filter(|&a| predicate(a))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn insert(&self, asset: &NewAsset) -> AppResult<Asset> {
        let mut inner = self.inner.write().await;
        if inner
            .assets
            .values()
            .any(|a| a.serial_number == asset.serial_number)
        {
            return Err(AppError::DuplicateSerialNumber(asset.serial_number.clone()));
        }

        inner.last_id += 1;
        let created = asset.clone().with_id(inner.last_id);
        inner.assets.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Asset>> {
        Ok(self.inner.read().await.assets.get(&id).cloned())
    }

    async fn find_by_serial_number(&self, serial_number: &str) -> AppResult<Option<Asset>> {
        Ok(self
            .inner
            .read()
            .await
            .assets
            .values()
            .find(|a| a.serial_number == serial_number)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Asset>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_type(&self, asset_type: AssetType) -> AppResult<Vec<Asset>> {
        Ok(self.filtered(|a| a.asset_type == asset_type).await)
    }

    async fn find_by_status(&self, status: AssetStatus) -> AppResult<Vec<Asset>> {
        Ok(self.filtered(|a| a.status == status).await)
    }

    async fn find_by_type_and_status(
        &self,
        asset_type: AssetType,
        status: AssetStatus,
    ) -> AppResult<Vec<Asset>> {
        Ok(self
            .filtered(|a| a.asset_type == asset_type && a.status == status)
            .await)
    }

    async fn find_by_name_or_serial_containing_ignore_case(
        &self,
        needle: &str,
    ) -> AppResult<Vec<Asset>> {
        let needle = needle.to_lowercase();
        Ok(self
            .filtered(|a| {
                a.name.to_lowercase().contains(&needle)
                    || a.serial_number.to_lowercase().contains(&needle)
            })
            .await)
    }

    async fn save(&self, asset: &Asset) -> AppResult<Asset> {
        let mut inner = self.inner.write().await;
        if !inner.assets.contains_key(&asset.id) {
            return Err(AppError::NotFound(asset.id));
        }
        if inner
            .assets
            .values()
            .any(|a| a.id != asset.id && a.serial_number == asset.serial_number)
        {
            return Err(AppError::DuplicateSerialNumber(asset.serial_number.clone()));
        }

        inner.assets.insert(asset.id, asset.clone());
        Ok(asset.clone())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        // shift_remove keeps the remaining entries in insertion order.
        Ok(self.inner.write().await.assets.shift_remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.inner.read().await.assets.len() as i64)
    }
}
