use async_trait::async_trait;
use sqlx::PgPool;

use super::AssetStore;
use crate::error::{AppError, AppResult};
use crate::models::{Asset, AssetStatus, AssetType, NewAsset};

const SERIAL_NUMBER_CONSTRAINT: &str = "uq_assets_serial_number";

/// True for a unique violation (SQLSTATE 23505) on the serial-number index.
fn is_serial_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(SERIAL_NUMBER_CONSTRAINT)
        }
        _ => false,
    }
}

fn map_write_error(err: sqlx::Error, serial_number: &str) -> AppError {
    if is_serial_conflict(&err) {
        AppError::DuplicateSerialNumber(serial_number.to_string())
    } else {
        AppError::Database(err)
    }
}

/// [`AssetStore`] backed by the `assets` table.
#[derive(Debug, Clone)]
pub struct PgAssetStore {
    pool: PgPool,
}

impl PgAssetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for PgAssetStore {
    async fn insert(&self, asset: &NewAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (name, asset_type, serial_number, purchase_date, status, assigned_to)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, asset_type, serial_number, purchase_date, status, assigned_to
            "#,
        )
        .bind(&asset.name)
        .bind(asset.asset_type)
        .bind(&asset.serial_number)
        .bind(asset.purchase_date)
        .bind(asset.status)
        .bind(&asset.assigned_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &asset.serial_number))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Asset>> {
        let asset = sqlx::query_as::<_, Asset>(
            "SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
             FROM assets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(asset)
    }

    async fn find_by_serial_number(&self, serial_number: &str) -> AppResult<Option<Asset>> {
        let asset = sqlx::query_as::<_, Asset>(
            "SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
             FROM assets WHERE serial_number = $1",
        )
        .bind(serial_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(asset)
    }

    async fn find_all(&self) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>(
            "SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
             FROM assets ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    async fn find_by_type(&self, asset_type: AssetType) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>(
            "SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
             FROM assets WHERE asset_type = $1 ORDER BY id ASC",
        )
        .bind(asset_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    async fn find_by_status(&self, status: AssetStatus) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>(
            "SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
             FROM assets WHERE status = $1 ORDER BY id ASC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    async fn find_by_type_and_status(
        &self,
        asset_type: AssetType,
        status: AssetStatus,
    ) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
            FROM assets
            WHERE asset_type = $1 AND status = $2
            ORDER BY id ASC
            "#,
        )
        .bind(asset_type)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    async fn find_by_name_or_serial_containing_ignore_case(
        &self,
        needle: &str,
    ) -> AppResult<Vec<Asset>> {
        // strpos instead of ILIKE so `%` and `_` in the needle match literally.
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT id, name, asset_type, serial_number, purchase_date, status, assigned_to
            FROM assets
            WHERE strpos(lower(name), lower($1)) > 0
               OR strpos(lower(serial_number), lower($1)) > 0
            ORDER BY id ASC
            "#,
        )
        .bind(needle)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    async fn save(&self, asset: &Asset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets
            SET name          = $1,
                asset_type    = $2,
                serial_number = $3,
                purchase_date = $4,
                status        = $5,
                assigned_to   = $6
            WHERE id = $7
            RETURNING id, name, asset_type, serial_number, purchase_date, status, assigned_to
            "#,
        )
        .bind(&asset.name)
        .bind(asset.asset_type)
        .bind(&asset.serial_number)
        .bind(asset.purchase_date)
        .bind(asset.status)
        .bind(&asset.assigned_to)
        .bind(asset.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &asset.serial_number))?
        .ok_or(AppError::NotFound(asset.id))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
