use crate::error::{Error, Result};
use crate::overlap::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Knobs for a reduction run.
///
/// - `tolerance`: absolute epsilon for cross-product magnitudes and bounding
///   box comparisons.
/// - `parallel`: reduce category groups on the rayon pool. Only has an effect
///   with the `parallel` feature; each group is still reduced sequentially.
/// - `track_survivors`: record the advisory "kept" list in the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceParams {
    pub tolerance: f64,
    pub parallel: bool,
    pub track_survivors: bool,
}

impl Default for ReduceParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            parallel: false,
            track_survivors: false,
        }
    }
}

impl ReduceParams {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_survivors(mut self, track: bool) -> Self {
        self.track_survivors = track;
        self
    }

    /// A zero tolerance makes every collinearity check fail and a non-finite
    /// one makes every check pass.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be a finite, positive number (got {})",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fixed_tolerance() {
        let params = ReduceParams::default();
        assert_eq!(params.tolerance, 1e-4);
        assert!(!params.parallel);
        assert!(!params.track_survivors);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_unusable_tolerances() {
        for tolerance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = ReduceParams::default().with_tolerance(tolerance);
            assert!(
                matches!(params.validate(), Err(Error::InvalidConfig(_))),
                "tolerance {tolerance} should be rejected"
            );
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let params: ReduceParams = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
        assert!(params.parallel);
        assert_eq!(params.tolerance, DEFAULT_TOLERANCE);
    }
}
