//! Vendor rating (LVR) model.

use serde::Serialize;
use shotweave_core::lvr::SeedVendor;
use sqlx::FromRow;

/// A row of the `vendors` table, serialized without its internal id.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Vendor {
    pub name: String,
    #[serde(rename = "type")]
    pub vendor_type: String,
    pub lvr_score: i32,
    pub reliability: String,
    pub price_competitiveness: String,
    pub contact: String,
}

impl From<&SeedVendor> for Vendor {
    fn from(seed: &SeedVendor) -> Self {
        Self {
            name: seed.name.to_string(),
            vendor_type: seed.vendor_type.to_string(),
            lvr_score: seed.lvr_score,
            reliability: seed.reliability.to_string(),
            price_competitiveness: seed.price_competitiveness.to_string(),
            contact: seed.contact.to_string(),
        }
    }
}

/// The built-in vendor list, used for seeding and as the read fallback.
pub fn seed_vendors() -> Vec<Vendor> {
    shotweave_core::lvr::SEED_VENDORS
        .iter()
        .map(Vendor::from)
        .collect()
}
