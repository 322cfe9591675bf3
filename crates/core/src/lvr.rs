//! Localized Vendor Rating (LVR) seed data.
//!
//! The same four vendors seed an empty `vendors` table and are served
//! directly when the store is unreachable.

use serde::Serialize;

/// A vendor rating as shown on the Line Producer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedVendor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub vendor_type: &'static str,
    pub lvr_score: i32,
    pub reliability: &'static str,
    pub price_competitiveness: &'static str,
    pub contact: &'static str,
}

pub const SEED_VENDORS: [SeedVendor; 4] = [
    SeedVendor {
        name: "Prime Camera Rentals",
        vendor_type: "Camera Unit",
        lvr_score: 92,
        reliability: "High",
        price_competitiveness: "Good",
        contact: "cam@prime.in",
    },
    SeedVendor {
        name: "VFX Nexus Studios",
        vendor_type: "VFX Unit",
        lvr_score: 85,
        reliability: "Medium",
        price_competitiveness: "Average",
        contact: "vfx@nexus.com",
    },
    SeedVendor {
        name: "Kerala Lights Crew",
        vendor_type: "Lighting Unit",
        lvr_score: 78,
        reliability: "Medium",
        price_competitiveness: "Excellent",
        contact: "klc@crew.net",
    },
    SeedVendor {
        name: "South Sound Design",
        vendor_type: "Sound Unit",
        lvr_score: 95,
        reliability: "High",
        price_competitiveness: "Good",
        contact: "sound@ssd.co",
    },
];
