/// Risk tier classification from peak forecast discharge.
///
/// Pure threshold ladder, no side effects. Thresholds are in cubic meters
/// per second of daily maximum river discharge and are lower-inclusive:
/// 500 is already moderate, 1500 already high, 3000 already extreme.

use crate::model::RiskLevel;

/// Discharge at or above which a location is at least moderate risk (m³/s).
pub const MODERATE_DISCHARGE: f64 = 500.0;
/// Discharge at or above which a location is at least high risk (m³/s).
pub const HIGH_DISCHARGE: f64 = 1500.0;
/// Discharge at or above which a location is extreme risk (m³/s).
pub const EXTREME_DISCHARGE: f64 = 3000.0;

/// Maps a peak discharge value to its risk tier.
///
/// Total over all f64 inputs: negative values and NaN fail every `>=`
/// comparison in the ladder and land on `Low`, so a location with bad or
/// missing data can never surface an undefined tier.
pub fn classify(max_discharge: f64) -> RiskLevel {
    if max_discharge >= EXTREME_DISCHARGE {
        RiskLevel::Extreme
    } else if max_discharge >= HIGH_DISCHARGE {
        RiskLevel::High
    } else if max_discharge >= MODERATE_DISCHARGE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tiers() {
        assert_eq!(classify(0.0), RiskLevel::Low);
        assert_eq!(classify(120.0), RiskLevel::Low);
        assert_eq!(classify(800.0), RiskLevel::Moderate);
        assert_eq!(classify(2000.0), RiskLevel::High);
        assert_eq!(classify(5000.0), RiskLevel::Extreme);
    }

    #[test]
    fn test_classify_boundaries_are_lower_inclusive() {
        assert_eq!(classify(499.999), RiskLevel::Low, "just below moderate threshold");
        assert_eq!(classify(500.0), RiskLevel::Moderate, "moderate threshold is inclusive");
        assert_eq!(classify(1499.999), RiskLevel::Moderate, "just below high threshold");
        assert_eq!(classify(1500.0), RiskLevel::High, "high threshold is inclusive");
        assert_eq!(classify(2999.999), RiskLevel::High, "just below extreme threshold");
        assert_eq!(classify(3000.0), RiskLevel::Extreme, "extreme threshold is inclusive");
    }

    #[test]
    fn test_classify_negative_discharge_is_low() {
        assert_eq!(classify(-1.0), RiskLevel::Low);
        assert_eq!(classify(f64::NEG_INFINITY), RiskLevel::Low);
    }

    #[test]
    fn test_classify_nan_is_low() {
        assert_eq!(classify(f64::NAN), RiskLevel::Low);
    }

    #[test]
    fn test_classify_infinity_is_extreme() {
        assert_eq!(classify(f64::INFINITY), RiskLevel::Extreme);
    }

    #[test]
    fn test_thresholds_are_ordered_ascending() {
        assert!(MODERATE_DISCHARGE < HIGH_DISCHARGE);
        assert!(HIGH_DISCHARGE < EXTREME_DISCHARGE);
    }
}
