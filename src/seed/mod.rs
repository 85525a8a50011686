use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Asset, AssetStatus, AssetType, CreateAsset};
use crate::service::AssetService;

static HARDWARE: &[&str] = &[
    "Dell Latitude", "ThinkPad X1", "MacBook Pro", "HP EliteBook", "Surface Laptop",
    "Dell OptiPlex", "Mac mini", "PowerEdge Server", "Synology NAS", "Cisco Switch",
];

static SOFTWARE: &[&str] = &[
    "Microsoft Office 365", "Adobe Creative Cloud", "JetBrains All Products", "Slack Business",
    "Zoom Pro", "AutoCAD", "Windows 11 Pro", "Visual Studio Enterprise",
];

static PERIPHERAL: &[&str] = &[
    "Logitech MX Master", "HP Mouse", "Dell UltraSharp Monitor", "Jabra Headset",
    "Keychron Keyboard", "Logitech Webcam", "Brother Printer", "USB-C Dock",
];

static HOLDERS: &[&str] = &[
    "Jane Smith", "John Doe", "Maria Garcia", "Wei Chen", "Aisha Khan",
    "Lucas Martin", "Olga Petrova", "Kenji Tanaka",
];

fn serial_prefix(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Hardware => "HW",
        AssetType::Software => "SW",
        AssetType::Peripheral => "PR",
    }
}

/// Builds one random, valid create request.
fn random_asset(rng: &mut impl Rng) -> CreateAsset {
    let asset_type = *AssetType::ALL.choose(rng).unwrap_or(&AssetType::Hardware);
    let catalog = match asset_type {
        AssetType::Hardware => HARDWARE,
        AssetType::Software => SOFTWARE,
        AssetType::Peripheral => PERIPHERAL,
    };
    let base = catalog.choose(rng).unwrap_or(&"Generic Asset");
    let status = *AssetStatus::ALL.choose(rng).unwrap_or(&AssetStatus::Available);

    let epoch = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or(NaiveDate::MIN);
    let purchase_date = epoch.checked_add_days(Days::new(rng.gen_range(0..2_000)));

    CreateAsset {
        name: Some(format!("{} {}", base, rng.gen_range(100..1000))),
        asset_type: Some(asset_type.to_string()),
        serial_number: Some(format!(
            "{}-{:08X}",
            serial_prefix(asset_type),
            rng.gen::<u32>()
        )),
        purchase_date,
        status: Some(status.to_string()),
        assigned_to: (status == AssetStatus::Assigned)
            .then(|| HOLDERS.choose(rng).unwrap_or(&"Jane Smith").to_string()),
    }
}

/// Creates up to `count` random assets through the service, so every seeded
/// row passes the same validation as an API request. Serial collisions are
/// skipped.
pub async fn seed_assets(service: &AssetService, count: usize) -> AppResult<Vec<Asset>> {
    info!("Seeding {} assets...", count);

    // StdRng is Send, unlike ThreadRng, so it can live across awaits.
    let mut rng = StdRng::from_entropy();
    let mut created = Vec::with_capacity(count);
    let mut skipped = 0_usize;

    for _ in 0..count {
        let input = random_asset(&mut rng);
        match service.create(&input).await {
            Ok(asset) => created.push(asset),
            Err(AppError::DuplicateSerialNumber(_)) => skipped += 1,
            Err(e) => return Err(e),
        }
    }

    info!(seeded = created.len(), skipped, "Seeding complete");
    Ok(created)
}
