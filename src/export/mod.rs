use crate::models::Asset;

/// Renders assets as CSV with a header row, in the order given.
pub fn assets_to_csv(assets: &[Asset]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "name",
        "type",
        "serialNumber",
        "purchaseDate",
        "status",
        "assignedTo",
    ])?;

    for a in assets {
        wtr.write_record([
            a.id.to_string(),
            a.name.clone(),
            a.asset_type.to_string(),
            a.serial_number.clone(),
            a.purchase_date.to_string(),
            a.status.to_string(),
            a.assigned_to.clone().unwrap_or_default(),
        ])?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetStatus, AssetType};
    use chrono::NaiveDate;

    #[test]
    fn empty_inventory_is_header_only() {
        let csv = assets_to_csv(&[]).unwrap();
        assert_eq!(csv, "id,name,type,serialNumber,purchaseDate,status,assignedTo\n");
    }

    #[test]
    fn rows_follow_header_and_quote_commas() {
        let assets = vec![
            Asset {
                id: 1,
                name: "Dell Latitude 5420".to_string(),
                asset_type: AssetType::Hardware,
                serial_number: "DL5420-2023-001".to_string(),
                purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
                status: AssetStatus::Available,
                assigned_to: None,
            },
            Asset {
                id: 2,
                name: "Office 365, E3".to_string(),
                asset_type: AssetType::Software,
                serial_number: "MSO365E3-2023-0001".to_string(),
                purchase_date: NaiveDate::from_ymd_opt(2023, 6, 7).unwrap(),
                status: AssetStatus::Assigned,
                assigned_to: Some("Jane Smith".to_string()),
            },
        ];

        let csv = assets_to_csv(&assets).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,Dell Latitude 5420,HARDWARE,DL5420-2023-001,2023-01-15,AVAILABLE,");
        assert_eq!(
            lines[2],
            "2,\"Office 365, E3\",SOFTWARE,MSO365E3-2023-0001,2023-06-07,ASSIGNED,Jane Smith"
        );
    }
}
