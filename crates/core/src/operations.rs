//! Daily on-set operations: progress reports from the executor dashboard and
//! asset status updates from the creative dashboard.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::risk::coerce_numeric;

pub const DPR_LOGGED_MESSAGE: &str = "Daily Progress Report logged successfully.";
pub const DPR_MISSING_FIELDS: &str = "DPR missing required fields";
pub const ASSET_MISSING_FIELDS: &str = "Asset status update missing fields";

/// Submitter recorded when a DPR names nobody.
pub const UNKNOWN_SUBMITTER: &str = "Unknown";

// ---------------------------------------------------------------------------
// Daily Progress Report
// ---------------------------------------------------------------------------

/// A validated Daily Progress Report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgressReport {
    pub scenes_shot: u32,
    pub daily_spend: f64,
    pub delay_minutes: u32,
    pub submitted_by: String,
}

impl DailyProgressReport {
    /// Validate raw DPR figures. Counts and spend must be non-negative.
    pub fn new(
        scenes_shot: i64,
        daily_spend: f64,
        delay_minutes: i64,
        submitted_by: Option<&str>,
    ) -> Result<Self, CoreError> {
        let scenes_shot = u32::try_from(scenes_shot).map_err(|_| {
            CoreError::Validation(format!("scenes_shot must be a non-negative integer, got {scenes_shot}"))
        })?;
        if !daily_spend.is_finite() || daily_spend < 0.0 {
            return Err(CoreError::Validation(format!(
                "daily_spend must be a non-negative amount, got {daily_spend}"
            )));
        }
        let delay_minutes = u32::try_from(delay_minutes).map_err(|_| {
            CoreError::Validation(format!(
                "delay_minutes must be a non-negative integer, got {delay_minutes}"
            ))
        })?;
        let submitted_by = submitted_by
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SUBMITTER)
            .to_string();

        Ok(Self {
            scenes_shot,
            daily_spend,
            delay_minutes,
            submitted_by,
        })
    }

    /// Build from loosely typed values. Numbers may arrive as JSON numbers or
    /// numeric strings; counts must be whole.
    pub fn from_json(
        scenes_shot: &Value,
        daily_spend: &Value,
        delay_minutes: &Value,
        submitted_by: Option<&str>,
    ) -> Result<Self, CoreError> {
        let scenes_shot = whole_number("scenes_shot", scenes_shot)?;
        let daily_spend = coerce_numeric(daily_spend).ok_or_else(|| {
            CoreError::Validation(format!("daily_spend must be a number, got {daily_spend}"))
        })?;
        let delay_minutes = whole_number("delay_minutes", delay_minutes)?;
        Self::new(scenes_shot, daily_spend, delay_minutes, submitted_by)
    }
}

fn whole_number(field: &str, value: &Value) -> Result<i64, CoreError> {
    coerce_numeric(value)
        .filter(|n| n.fract() == 0.0 && n.abs() <= i64::MAX as f64)
        .map(|n| n as i64)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a whole number, got {value}")))
}

// ---------------------------------------------------------------------------
// Asset status
// ---------------------------------------------------------------------------

/// A validated VFX / post-production asset status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetStatusUpdate {
    pub asset_id: String,
    pub new_status: String,
}

impl AssetStatusUpdate {
    /// Build from loosely typed values. Ids may be strings or numbers.
    pub fn from_json(asset_id: &Value, new_status: &Value) -> Result<Self, CoreError> {
        let asset_id = display_scalar(asset_id)
            .ok_or_else(|| CoreError::Validation("asset_id must be a non-empty string or number".into()))?;
        let new_status = display_scalar(new_status)
            .ok_or_else(|| CoreError::Validation("new_status must be a non-empty string".into()))?;
        Ok(Self {
            asset_id,
            new_status,
        })
    }

    /// Confirmation returned to the client.
    pub fn confirmation(&self) -> String {
        format!(
            "Asset {} status updated to {}.",
            self.asset_id, self.new_status
        )
    }
}

fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn valid_dpr_is_accepted() {
        let dpr = DailyProgressReport::new(4, 125_000.5, 30, Some(" asha ")).unwrap();
        assert_eq!(dpr.scenes_shot, 4);
        assert_eq!(dpr.delay_minutes, 30);
        assert_eq!(dpr.submitted_by, "asha");
    }

    #[test]
    fn dpr_without_submitter_is_unknown() {
        let dpr = DailyProgressReport::new(0, 0.0, 0, None).unwrap();
        assert_eq!(dpr.submitted_by, UNKNOWN_SUBMITTER);
        let dpr = DailyProgressReport::new(0, 0.0, 0, Some("  ")).unwrap();
        assert_eq!(dpr.submitted_by, UNKNOWN_SUBMITTER);
    }

    #[test]
    fn negative_dpr_figures_are_rejected() {
        assert_matches!(
            DailyProgressReport::new(-1, 10.0, 0, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            DailyProgressReport::new(1, -10.0, 0, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            DailyProgressReport::new(1, 10.0, -5, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            DailyProgressReport::new(1, f64::INFINITY, 0, None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn dpr_figures_may_be_numeric_strings() {
        let dpr = DailyProgressReport::from_json(&json!("3"), &json!(" 1500.75 "), &json!(20.0), None)
            .unwrap();
        assert_eq!(dpr.scenes_shot, 3);
        assert_eq!(dpr.daily_spend, 1500.75);
        assert_eq!(dpr.delay_minutes, 20);
    }

    #[test]
    fn dpr_rejects_fractional_or_non_numeric_figures() {
        assert_matches!(
            DailyProgressReport::from_json(&json!(2.5), &json!(10), &json!(0), None),
            Err(CoreError::Validation(msg)) if msg.starts_with("scenes_shot")
        );
        assert_matches!(
            DailyProgressReport::from_json(&json!(2), &json!("lots"), &json!(0), None),
            Err(CoreError::Validation(msg)) if msg.starts_with("daily_spend")
        );
        assert_matches!(
            DailyProgressReport::from_json(&json!(2), &json!(10), &json!(true), None),
            Err(CoreError::Validation(msg)) if msg.starts_with("delay_minutes")
        );
        assert_matches!(
            DailyProgressReport::from_json(&json!("-1"), &json!(10), &json!(0), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn asset_update_accepts_numeric_ids() {
        let update = AssetStatusUpdate::from_json(&json!(17), &json!("Approved")).unwrap();
        assert_eq!(update.confirmation(), "Asset 17 status updated to Approved.");
    }

    #[test]
    fn asset_update_rejects_blank_or_structured_values() {
        assert_matches!(
            AssetStatusUpdate::from_json(&json!(""), &json!("Approved")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            AssetStatusUpdate::from_json(&json!("VFX-12"), &json!(["Approved"])),
            Err(CoreError::Validation(_))
        );
    }
}
