//! Deposit growth engines.
//!
//! The fixed-rate engine is a deterministic compound-interest projector.
//! The variable-rate engine repeats the same single-trial computation
//! with an annual rate sampled fresh per trial and summarizes the
//! resulting capital distribution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::stats;
use crate::variates;
use crate::SimError;

/// Mean of the sampled annual rate for the variable deposit.
const VARIABLE_RATE_MEAN: f64 = 0.05;
/// Standard deviation of the sampled annual rate.
const VARIABLE_RATE_STD_DEV: f64 = 0.02;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedDepositParams {
    pub capital: f64,
    /// Annual interest rate in percent.
    pub rate_percent: f64,
    /// Deposit term in years; fractional terms are allowed.
    pub years: f64,
}

impl FixedDepositParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.capital.is_finite() || self.capital <= 0.0 {
            return Err(SimError::InvalidParameter(
                "capital must be greater than zero".to_string(),
            ));
        }
        if !self.rate_percent.is_finite() || !(0.0..=100.0).contains(&self.rate_percent) {
            return Err(SimError::InvalidParameter(
                "rate_percent must be between 0 and 100".to_string(),
            ));
        }
        if !self.years.is_finite() || self.years <= 0.0 {
            return Err(SimError::InvalidParameter(
                "years must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// One row of the fixed-deposit yearly schedule. The final row's period
/// is the true fractional term, not the next whole year.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YearlyRecord {
    pub period: f64,
    pub opening_capital: f64,
    pub interest_earned: f64,
    pub closing_capital: f64,
    pub accumulated_gain: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedDepositSummary {
    pub initial_capital: f64,
    pub final_capital: f64,
    pub total_gain: f64,
    pub return_rate_percent: f64,
    pub schedule: Vec<YearlyRecord>,
}

pub fn run_fixed_deposit(params: &FixedDepositParams) -> Result<FixedDepositSummary, SimError> {
    params.validate()?;

    let rate = params.rate_percent / 100.0;
    let final_capital = params.capital * (1.0 + rate).powf(params.years);
    let total_gain = final_capital - params.capital;
    let return_rate_percent = total_gain / params.capital * 100.0;

    let whole_years = params.years.ceil() as usize;
    let mut schedule = Vec::with_capacity(whole_years + 1);
    for i in 0..=whole_years {
        // Clamp the exponent so the last partial period uses the true
        // fractional term.
        let period = (i as f64).min(params.years);
        let closing_capital = params.capital * (1.0 + rate).powf(period);
        let opening_capital = if i == 0 {
            params.capital
        } else {
            let prev_period = ((i - 1) as f64).min(params.years);
            params.capital * (1.0 + rate).powf(prev_period)
        };
        schedule.push(YearlyRecord {
            period,
            opening_capital,
            interest_earned: closing_capital - opening_capital,
            closing_capital,
            accumulated_gain: closing_capital - params.capital,
        });
    }

    Ok(FixedDepositSummary {
        initial_capital: params.capital,
        final_capital,
        total_gain,
        return_rate_percent,
        schedule,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDepositParams {
    pub capital: f64,
    /// Deposit term in years; fractional terms are allowed.
    pub years: f64,
    /// Number of Monte Carlo trials, 100..=10000.
    pub trials: usize,
}

impl VariableDepositParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.capital.is_finite() || self.capital <= 0.0 {
            return Err(SimError::InvalidParameter(
                "capital must be greater than zero".to_string(),
            ));
        }
        if !self.years.is_finite() || self.years <= 0.0 {
            return Err(SimError::InvalidParameter(
                "years must be greater than zero".to_string(),
            ));
        }
        if !(100..=10_000).contains(&self.trials) {
            return Err(SimError::InvalidParameter(
                "trials must be between 100 and 10000".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VariableDepositSummary {
    pub initial_capital: f64,
    pub mean_capital: f64,
    pub min_capital: f64,
    pub max_capital: f64,
    pub median_capital: f64,
    pub percentile_25: f64,
    /// Historically labelled the 75th percentile but computed at the
    /// 95th. Kept as-is so downstream reports retain their meaning.
    pub percentile_75: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
    /// Final capital of every trial, in trial order.
    pub finals: Vec<f64>,
}

pub fn run_variable_deposit<R: Rng>(
    params: &VariableDepositParams,
    rng: &mut R,
) -> Result<VariableDepositSummary, SimError> {
    params.validate()?;

    let mut finals = Vec::with_capacity(params.trials);
    for _ in 0..params.trials {
        let z = variates::standard_normal(rng);
        // Negative rates are not meaningful here; floor at zero.
        let rate = (VARIABLE_RATE_MEAN + z * VARIABLE_RATE_STD_DEV).max(0.0);
        finals.push(params.capital * (1.0 + rate).powf(params.years));
    }

    Ok(VariableDepositSummary {
        initial_capital: params.capital,
        mean_capital: stats::mean(&finals),
        min_capital: stats::min(&finals),
        max_capital: stats::max(&finals),
        median_capital: stats::median(&finals),
        percentile_25: stats::percentile(&finals, 25.0),
        percentile_75: stats::percentile(&finals, 95.0),
        std_dev: stats::std_dev(&finals),
        coefficient_of_variation: stats::coefficient_of_variation(&finals),
        finals,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn fixed_deposit_known_values() {
        let params = FixedDepositParams {
            capital: 1000.0,
            rate_percent: 10.0,
            years: 2.0,
        };
        let summary = run_fixed_deposit(&params).unwrap();
        assert!((summary.final_capital - 1210.0).abs() < 1e-9);
        assert!((summary.total_gain - 210.0).abs() < 1e-9);
        assert!((summary.return_rate_percent - 21.0).abs() < 1e-9);
        assert_eq!(summary.schedule.len(), 3);
    }

    #[test]
    fn fixed_deposit_schedule_chains() {
        let params = FixedDepositParams {
            capital: 2500.0,
            rate_percent: 7.5,
            years: 4.0,
        };
        let summary = run_fixed_deposit(&params).unwrap();
        for pair in summary.schedule.windows(2) {
            assert_eq!(pair[0].closing_capital, pair[1].opening_capital);
        }
        assert_eq!(summary.schedule[0].interest_earned, 0.0);
        let last = summary.schedule.last().unwrap();
        assert!((last.closing_capital - summary.final_capital).abs() < 1e-9);
    }

    #[test]
    fn fixed_deposit_fractional_term_clamps_last_period() {
        let params = FixedDepositParams {
            capital: 1000.0,
            rate_percent: 10.0,
            years: 2.5,
        };
        let summary = run_fixed_deposit(&params).unwrap();
        // Periods 0, 1, 2, 2.5.
        assert_eq!(summary.schedule.len(), 4);
        let last = summary.schedule.last().unwrap();
        assert_eq!(last.period, 2.5);
        assert!((last.closing_capital - summary.final_capital).abs() < 1e-9);
    }

    #[test]
    fn fixed_deposit_rejects_nonpositive_capital() {
        let params = FixedDepositParams {
            capital: 0.0,
            rate_percent: 10.0,
            years: 1.0,
        };
        assert!(matches!(
            run_fixed_deposit(&params),
            Err(SimError::InvalidParameter(_))
        ));
    }

    #[test]
    fn variable_deposit_order_statistics_hold() {
        let params = VariableDepositParams {
            capital: 1000.0,
            years: 3.0,
            trials: 500,
        };
        let mut rng = StdRng::seed_from_u64(31);
        let summary = run_variable_deposit(&params, &mut rng).unwrap();
        assert_eq!(summary.finals.len(), 500);
        assert!(summary.min_capital <= summary.median_capital);
        assert!(summary.median_capital <= summary.max_capital);
        assert!(summary.percentile_25 <= summary.median_capital);
        assert!(summary.median_capital <= summary.percentile_75);
        assert!(summary.std_dev >= 0.0);
    }

    #[test]
    fn variable_deposit_mean_tracks_expected_growth() {
        let params = VariableDepositParams {
            capital: 1000.0,
            years: 1.0,
            trials: 10_000,
        };
        let mut rng = StdRng::seed_from_u64(37);
        let summary = run_variable_deposit(&params, &mut rng).unwrap();
        let expected = 1000.0 * 1.05;
        assert!(
            (summary.mean_capital - expected).abs() / expected < 0.01,
            "mean {} too far from {}",
            summary.mean_capital,
            expected
        );
    }

    #[test]
    fn variable_deposit_is_reproducible_for_equal_seeds() {
        let params = VariableDepositParams {
            capital: 1500.0,
            years: 2.0,
            trials: 200,
        };
        let a = run_variable_deposit(&params, &mut StdRng::seed_from_u64(41)).unwrap();
        let b = run_variable_deposit(&params, &mut StdRng::seed_from_u64(41)).unwrap();
        assert_eq!(a.finals, b.finals);
        assert_eq!(a.mean_capital, b.mean_capital);
    }

    #[test]
    fn variable_deposit_rejects_out_of_range_trials() {
        let params = VariableDepositParams {
            capital: 1000.0,
            years: 1.0,
            trials: 50,
        };
        let mut rng = StdRng::seed_from_u64(43);
        assert!(matches!(
            run_variable_deposit(&params, &mut rng),
            Err(SimError::InvalidParameter(_))
        ));
    }
}
