//! Project risk scoring (Producer/CEO risk meter).
//!
//! A three-feature linear model, fitted by ridge regression on a fixed
//! training table, maps `(days_behind, cost_variance_pct, complexity_score)`
//! to a 0-100 risk score. The fitted [`RiskModel`] is built once at startup
//! and passed by reference into [`score`]; nothing here retrains per call.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Ridge regularisation strength used for the shipped model.
pub const RIDGE_ALPHA: f64 = 1.0;

/// Training table: `([days_behind, cost_variance_pct, complexity_score], risk_score)`.
pub const TRAINING_SET: [([f64; 3], f64); 7] = [
    ([1.0, 5.0, 70.0], 55.0),
    ([3.0, 10.0, 80.0], 75.0),
    ([5.0, 15.0, 90.0], 90.0),
    ([2.0, 8.0, 75.0], 65.0),
    ([0.0, 2.0, 60.0], 30.0),
    ([4.0, 12.0, 85.0], 80.0),
    ([6.0, 20.0, 95.0], 95.0),
];

/// Scores strictly above this are RED.
pub const RED_THRESHOLD: u8 = 80;
/// Scores strictly above this (and not RED) are YELLOW.
pub const YELLOW_THRESHOLD: u8 = 50;

pub const RED_SUGGESTION: &str = "IMMEDIATE EXECUTIVE INTERVENTION: Project is in critical risk zone. Review major budget lines and staffing immediately.";
pub const YELLOW_SUGGESTION: &str = "CAUTION: Budget variance is concerning. Focus on optimizing the next 5 days of shooting schedule and re-negotiate high-cost vendor contracts.";
pub const GREEN_SUGGESTION: &str = "Project is on track. Maintain current efficiency and monitor daily progress reports closely.";
pub const INVALID_INPUT_SUGGESTION: &str = "Invalid input data. All inputs must be numeric.";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while fitting, loading or saving a [`RiskModel`].
#[derive(Debug, thiserror::Error)]
pub enum RiskModelError {
    #[error("training data is degenerate: normal equations are singular")]
    Singular,

    #[error("training data is empty")]
    NoSamples,

    #[error("model artifact I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// The three project-health signals, already coerced to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub days_behind: f64,
    pub cost_variance_pct: f64,
    pub complexity_score: f64,
}

impl RiskInput {
    fn features(&self) -> [f64; 3] {
        [self.days_behind, self.cost_variance_pct, self.complexity_score]
    }

    /// Coerce loosely typed JSON values into a [`RiskInput`].
    ///
    /// Accepts JSON numbers and strings that parse as a finite float.
    /// Returns `None` if any value is not numeric.
    pub fn from_json(
        days_behind: &Value,
        cost_variance_pct: &Value,
        complexity_score: &Value,
    ) -> Option<Self> {
        Some(Self {
            days_behind: coerce_numeric(days_behind)?,
            cost_variance_pct: coerce_numeric(cost_variance_pct)?,
            complexity_score: coerce_numeric(complexity_score)?,
        })
    }
}

pub(crate) fn coerce_numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Categorical risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "GREEN")]
    Green,
    #[serde(rename = "YELLOW")]
    Yellow,
    #[serde(rename = "RED")]
    Red,
    /// Input could not be scored.
    Error,
}

impl RiskStatus {
    /// Band for a clamped score. Boundaries belong to the lower band.
    pub fn from_score(score: u8) -> Self {
        if score > RED_THRESHOLD {
            Self::Red
        } else if score > YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    /// Fixed recommendation text for a scored band.
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::Red => RED_SUGGESTION,
            Self::Yellow => YELLOW_SUGGESTION,
            Self::Green => GREEN_SUGGESTION,
            Self::Error => INVALID_INPUT_SUGGESTION,
        }
    }
}

/// Result of one risk-meter evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk_score: u8,
    pub status: RiskStatus,
    pub suggestion: String,
}

impl RiskResult {
    fn error(suggestion: impl Into<String>) -> Self {
        Self {
            risk_score: 0,
            status: RiskStatus::Error,
            suggestion: suggestion.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Fitted linear model `y = intercept + coefficients . x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    pub intercept: f64,
    pub coefficients: [f64; 3],
    pub alpha: f64,
}

impl RiskModel {
    /// Fit by ridge regression with an unpenalised intercept.
    ///
    /// Features and targets are centred, `(XᵀX + αI) w = Xᵀy` is solved for
    /// the coefficients and the intercept is recovered from the means.
    pub fn fit(samples: &[([f64; 3], f64)], alpha: f64) -> Result<Self, RiskModelError> {
        if samples.is_empty() {
            return Err(RiskModelError::NoSamples);
        }
        let n = samples.len() as f64;

        let mut x_mean = [0.0; 3];
        let mut y_mean = 0.0;
        for (x, y) in samples {
            for j in 0..3 {
                x_mean[j] += x[j] / n;
            }
            y_mean += y / n;
        }

        let mut gram = [[0.0; 3]; 3];
        let mut rhs = [0.0; 3];
        for (x, y) in samples {
            let xc = [x[0] - x_mean[0], x[1] - x_mean[1], x[2] - x_mean[2]];
            let yc = y - y_mean;
            for i in 0..3 {
                for j in 0..3 {
                    gram[i][j] += xc[i] * xc[j];
                }
                rhs[i] += xc[i] * yc;
            }
        }
        for (i, row) in gram.iter_mut().enumerate() {
            row[i] += alpha;
        }

        let coefficients = solve3(gram, rhs).ok_or(RiskModelError::Singular)?;
        let intercept = y_mean
            - coefficients
                .iter()
                .zip(x_mean.iter())
                .map(|(w, m)| w * m)
                .sum::<f64>();

        Ok(Self {
            intercept,
            coefficients,
            alpha,
        })
    }

    /// The model fitted on [`TRAINING_SET`] with [`RIDGE_ALPHA`].
    pub fn trained() -> Result<Self, RiskModelError> {
        Self::fit(&TRAINING_SET, RIDGE_ALPHA)
    }

    /// Raw (unclamped) prediction.
    pub fn predict(&self, input: &RiskInput) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(input.features())
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    /// Read a JSON model artifact.
    pub fn load(path: &Path) -> Result<Self, RiskModelError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write this model as a JSON artifact, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), RiskModelError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    /// Load the artifact at `path` if present, otherwise train and write it.
    pub fn load_or_train(path: &Path) -> Result<Self, RiskModelError> {
        if path.exists() {
            return Self::load(path);
        }
        let model = Self::trained()?;
        model.save(path)?;
        Ok(model)
    }
}

/// Solve a 3x3 linear system by Gaussian elimination with partial pivoting.
fn solve3(mut a: [[f64; 3]; 3], mut b: [f64; 3]) -> Option<[f64; 3]> {
    const EPSILON: f64 = 1e-12;

    for col in 0..3 {
        let pivot = (col..3).max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))?;
        if a[pivot][col].abs() < EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in 0..3 {
            if row == col {
                continue;
            }
            let factor = a[row][col] / a[col][col];
            for k in col..3 {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    Some([b[0] / a[0][0], b[1] / a[1][1], b[2] / a[2][2]])
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score already-numeric input.
pub fn score_input(model: &RiskModel, input: &RiskInput) -> RiskResult {
    let prediction = model.predict(input);
    if !prediction.is_finite() {
        return RiskResult::error(format!("Prediction failed: model produced {prediction}"));
    }

    let risk_score = prediction.trunc().clamp(0.0, 100.0) as u8;
    let status = RiskStatus::from_score(risk_score);
    RiskResult {
        risk_score,
        status,
        suggestion: status.suggestion().to_string(),
    }
}

/// Score loosely typed request values.
///
/// Non-numeric input is recovered into a result with status `Error`.
pub fn score(
    model: &RiskModel,
    days_behind: &Value,
    cost_variance_pct: &Value,
    complexity_score: &Value,
) -> RiskResult {
    match RiskInput::from_json(days_behind, cost_variance_pct, complexity_score) {
        Some(input) => score_input(model, &input),
        None => RiskResult::error(INVALID_INPUT_SUGGESTION),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
