/// Rate applied when a stored investment has no interest rate (percent).
pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 10.0;

/// Projection window in years. Independent of the investment's own period.
pub const PROJECTION_HORIZON_YEARS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSettings {
    pub default_rate_percent: f64,
    pub horizon_years: u32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            default_rate_percent: DEFAULT_INTEREST_RATE_PERCENT,
            horizon_years: PROJECTION_HORIZON_YEARS,
        }
    }
}

impl ProjectionSettings {
    /// Projected value of `amount` over the configured horizon, falling back to
    /// the default rate when none is stored.
    pub fn project(&self, amount: f64, interest_rate: Option<f64>) -> f64 {
        let rate = interest_rate.unwrap_or(self.default_rate_percent);
        future_value(amount, rate, self.horizon_years)
    }
}

/// Compound interest, compounded yearly: `amount * (1 + rate/100)^years`.
pub fn future_value(amount: f64, rate_percent: f64, years: u32) -> f64 {
    let years = i32::try_from(years).unwrap_or(i32::MAX);
    amount * (1.0 + rate_percent / 100.0).powi(years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_value_five_percent() {
        let fv = future_value(1000.0, 5.0, 5);
        assert!((fv - 1276.2815625).abs() < 1e-6, "got {}", fv);
    }

    #[test]
    fn test_future_value_zero_years_is_principal() {
        assert_eq!(future_value(250.0, 7.5, 0), 250.0);
    }

    #[test]
    fn test_future_value_negative_rate_shrinks() {
        // Negative rates are accepted as-is.
        let fv = future_value(100.0, -10.0, 2);
        assert!((fv - 81.0).abs() < 1e-9, "got {}", fv);
    }

    #[test]
    fn test_project_uses_stored_rate() {
        let settings = ProjectionSettings::default();
        let fv = settings.project(2000.0, Some(3.0));
        assert!((fv - 2000.0 * 1.03_f64.powi(5)).abs() < 1e-9);
    }

    #[test]
    fn test_project_falls_back_to_default_rate() {
        let settings = ProjectionSettings::default();
        let fv = settings.project(1000.0, None);
        assert!((fv - 1000.0 * 1.1_f64.powi(5)).abs() < 1e-9);
        assert!((fv - 1610.51).abs() < 1e-6, "got {}", fv);
    }

    #[test]
    fn test_custom_settings() {
        let settings = ProjectionSettings { default_rate_percent: 0.0, horizon_years: 10 };
        assert_eq!(settings.project(500.0, None), 500.0);
        let fv = settings.project(500.0, Some(100.0));
        assert_eq!(fv, 500.0 * 1024.0);
    }
}
