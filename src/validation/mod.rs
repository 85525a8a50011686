//! Field rules for new assets and the status-transition rule.
//!
//! Everything here is pure: no store access, no logging.

use crate::error::{AppError, AppResult, FieldErrors};
use crate::models::{AssetStatus, AssetType, CreateAsset, NewAsset};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Checks every field of a create request and reports one message per
/// violated field. Never stops at the first failure.
pub fn validate_new_asset(input: &CreateAsset) -> Result<NewAsset, FieldErrors> {
    let mut errors = FieldErrors::new();

    match input.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            let len = name.chars().count();
            if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
                errors.insert("name", "Name must be 3 to 100 characters long".to_string());
            }
        }
        _ => {
            errors.insert("name", "Name is mandatory".to_string());
        }
    }

    let asset_type = match input.asset_type.as_deref() {
        None => {
            errors.insert("type", "Type is required".to_string());
            None
        }
        Some(raw) => match raw.parse::<AssetType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.insert(
                    "type",
                    "Type must be one of HARDWARE, SOFTWARE, PERIPHERAL".to_string(),
                );
                None
            }
        },
    };

    if is_blank(input.serial_number.as_deref()) {
        errors.insert("serialNumber", "Serial number is required".to_string());
    }

    if input.purchase_date.is_none() {
        errors.insert("purchaseDate", "Purchase date is required".to_string());
    }

    let status = match input.status.as_deref() {
        None => {
            errors.insert("status", "Status is required".to_string());
            None
        }
        Some(raw) => match raw.parse::<AssetStatus>() {
            Ok(s) => Some(s),
            Err(_) => {
                errors.insert(
                    "status",
                    "Status must be one of AVAILABLE, ASSIGNED, MAINTENANCE, RETIRED".to_string(),
                );
                None
            }
        },
    };

    // The assignee rule only makes sense once the status itself is known.
    let assignee_blank = is_blank(input.assigned_to.as_deref());
    match status {
        Some(AssetStatus::Assigned) if assignee_blank => {
            errors.insert(
                "assignedTo",
                "Assigned to is required when status is ASSIGNED".to_string(),
            );
        }
        Some(s) if s != AssetStatus::Assigned && !assignee_blank => {
            errors.insert(
                "assignedTo",
                "Assigned to must be empty unless status is ASSIGNED".to_string(),
            );
        }
        _ => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    let (Some(name), Some(asset_type), Some(serial_number), Some(purchase_date), Some(status)) = (
        input.name.clone(),
        asset_type,
        input.serial_number.clone(),
        input.purchase_date,
        status,
    ) else {
        return Err(errors);
    };

    Ok(NewAsset {
        name,
        asset_type,
        serial_number,
        purchase_date,
        status,
        assigned_to: if status == AssetStatus::Assigned {
            input.assigned_to.clone()
        } else {
            None
        },
    })
}

/// Parses the requested status and checks that an assignee comes with
/// ASSIGNED.
pub fn validate_status_transition(
    new_status: &str,
    assigned_to: Option<&str>,
) -> AppResult<AssetStatus> {
    let status = new_status
        .parse::<AssetStatus>()
        .map_err(|_| AppError::InvalidArgument("Invalid status value".to_string()))?;

    if status == AssetStatus::Assigned && is_blank(assigned_to) {
        return Err(AppError::InvalidArgument(
            "assignedTo required when status is ASSIGNED".to_string(),
        ));
    }

    Ok(status)
}
