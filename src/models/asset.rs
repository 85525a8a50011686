use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Returned when a string does not name any variant of an asset enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// ── AssetType ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "asset_type", rename_all = "UPPERCASE")]
pub enum AssetType {
    Hardware,
    Software,
    Peripheral,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [AssetType::Hardware, AssetType::Software, AssetType::Peripheral];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Hardware => "HARDWARE",
            AssetType::Software => "SOFTWARE",
            AssetType::Peripheral => "PERIPHERAL",
        }
    }
}

impl FromStr for AssetType {
    type Err = UnknownVariant;

    /// Case-insensitive match against the canonical upper-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HARDWARE" => Ok(AssetType::Hardware),
            "SOFTWARE" => Ok(AssetType::Software),
            "PERIPHERAL" => Ok(AssetType::Peripheral),
            _ => Err(UnknownVariant {
                kind: "asset type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AssetStatus ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "asset_status", rename_all = "UPPERCASE")]
pub enum AssetStatus {
    Available,
    Assigned,
    Maintenance,
    Retired,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Available,
        AssetStatus::Assigned,
        AssetStatus::Maintenance,
        AssetStatus::Retired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::Assigned => "ASSIGNED",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::Retired => "RETIRED",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(AssetStatus::Available),
            "ASSIGNED" => Ok(AssetStatus::Assigned),
            "MAINTENANCE" => Ok(AssetStatus::Maintenance),
            "RETIRED" => Ok(AssetStatus::Retired),
            _ => Err(UnknownVariant {
                kind: "asset status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Asset ─────────────────────────────────────────────────────────────────────

/// A persisted inventory item. `assigned_to` is `Some` exactly when
/// `status` is [`AssetStatus::Assigned`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub status: AssetStatus,
    pub assigned_to: Option<String>,
}

/// A validated asset that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub name: String,
    pub asset_type: AssetType,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub status: AssetStatus,
    pub assigned_to: Option<String>,
}

impl NewAsset {
    pub fn with_id(self, id: i64) -> Asset {
        Asset {
            id,
            name: self.name,
            asset_type: self.asset_type,
            serial_number: self.serial_number,
            purchase_date: self.purchase_date,
            status: self.status,
            assigned_to: self.assigned_to,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Raw create body. Everything is optional so that missing fields surface as
/// per-field validation messages rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFilters {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}
