//! Persistence port for assets.
//!
//! Implementations own all storage details. Sequences come back in insertion
//! order (ascending id). Serial-number uniqueness is enforced here, atomically
//! with the insert, so the service's own pre-check is never the only guard.

mod memory;
mod postgres;

pub use memory::MemoryAssetStore;
pub use postgres::PgAssetStore;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Asset, AssetStatus, AssetType, NewAsset};

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persists a new asset and returns it with its assigned id.
    ///
    /// Returns `AppError::DuplicateSerialNumber` if the serial is taken.
    async fn insert(&self, asset: &NewAsset) -> AppResult<Asset>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Asset>>;

    async fn find_by_serial_number(&self, serial_number: &str) -> AppResult<Option<Asset>>;

    async fn find_all(&self) -> AppResult<Vec<Asset>>;

    async fn find_by_type(&self, asset_type: AssetType) -> AppResult<Vec<Asset>>;

    async fn find_by_status(&self, status: AssetStatus) -> AppResult<Vec<Asset>>;

    async fn find_by_type_and_status(
        &self,
        asset_type: AssetType,
        status: AssetStatus,
    ) -> AppResult<Vec<Asset>>;

    /// Assets whose name or serial number contains `needle`, ignoring case.
    async fn find_by_name_or_serial_containing_ignore_case(
        &self,
        needle: &str,
    ) -> AppResult<Vec<Asset>>;

    /// Overwrites an existing row. Returns `AppError::NotFound` if the id is
    /// unknown.
    async fn save(&self, asset: &Asset) -> AppResult<Asset>;

    /// Returns `false` if no row had this id.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    async fn count(&self) -> AppResult<i64>;
}
