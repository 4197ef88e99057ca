//! Per-trial cash-flow model.
//!
//! For each period `t = 0 .. horizon - 1` a trial computes
//!
//! ```text
//! revenue[t] = max(R[t] * (1 + 0.02 t) * shock[t], 0)    R ~ N(revenue_mean, revenue_std)
//!                                                         shock ~ N(1, market_volatility)
//! cost[t]    = max(C[t], 0)                               C ~ N(cost_mean, cost_std)
//! factor[t]  = 1 - (sum_{k<=t} noise[k]) / 12             noise ~ N(inflation_rate, 0.01)
//! cash[t]    = (revenue[t] - cost[t]) * factor[t]
//! discount[t]= 1 / 1.1^(t / 12)
//! ```
//!
//! and reduces the cash series to NPV, ROI and the break-even period.
//!
//! Draw order inside a trial is fixed: all revenue draws, then all shocks,
//! then all costs, then all inflation noise terms.

use venture_core::types::{Scenario, TrialOutcome};

use super::workspace::TrialWorkspace;
use crate::rng::VentureRng;

/// Nominal annual discount rate.
pub const ANNUAL_DISCOUNT_RATE: f64 = 0.10;

/// Deterministic revenue growth per period.
pub const MONTHLY_GROWTH_RATE: f64 = 0.02;

/// Standard deviation of the per-period inflation noise.
pub const INFLATION_NOISE_STD: f64 = 0.01;

/// Periods per year.
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// Deterministic, scenario-specific inputs shared by every trial.
///
/// Built once per `simulate` call; holds the discount and growth curves so
/// trials only evaluate the stochastic part.
#[derive(Clone, Debug)]
pub struct CashFlowModel {
    initial_investment: f64,
    revenue_mean: f64,
    revenue_std: f64,
    cost_mean: f64,
    cost_std: f64,
    inflation_rate: f64,
    market_volatility: f64,
    growth: Vec<f64>,
    discount: Vec<f64>,
}

impl CashFlowModel {
    /// Precomputes the growth trend and discount factors for `scenario`.
    pub fn new(scenario: &Scenario) -> Self {
        let horizon = scenario.time_horizon() as usize;
        Self {
            initial_investment: scenario.initial_investment(),
            revenue_mean: scenario.revenue_mean(),
            revenue_std: scenario.revenue_std(),
            cost_mean: scenario.cost_mean(),
            cost_std: scenario.cost_std(),
            inflation_rate: scenario.inflation_rate(),
            market_volatility: scenario.market_volatility(),
            growth: growth_trend(horizon),
            discount: discount_factors(horizon),
        }
    }

    /// Number of periods per trial.
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.discount.len()
    }

    /// Discount factor per period.
    #[inline]
    pub fn discount(&self) -> &[f64] {
        &self.discount
    }

    /// Runs one trial.
    ///
    /// `workspace` is resized as needed; its previous contents are ignored.
    pub fn simulate_trial(
        &self,
        rng: &mut VentureRng,
        workspace: &mut TrialWorkspace,
    ) -> TrialOutcome {
        workspace.ensure_capacity(self.n_periods());

        rng.fill_normal(workspace.revenue_mut(), self.revenue_mean, self.revenue_std);
        rng.fill_normal(workspace.shocks_mut(), 1.0, self.market_volatility);
        rng.fill_normal(workspace.costs_mut(), self.cost_mean, self.cost_std);
        rng.fill_normal(
            workspace.inflation_mut(),
            self.inflation_rate,
            INFLATION_NOISE_STD,
        );

        let (revenue, shocks, costs, inflation) = workspace.series();
        self.reduce(revenue, shocks, costs, inflation)
    }

    /// Reduces pre-drawn series to a trial outcome.
    fn reduce(
        &self,
        revenue: &[f64],
        shocks: &[f64],
        costs: &[f64],
        inflation: &[f64],
    ) -> TrialOutcome {
        let mut cumulative_inflation = 0.0;
        let mut discounted = 0.0;
        let mut cumulative_cash = 0.0;
        let mut break_even_period = None;

        for t in 0..self.n_periods() {
            let period_revenue = (revenue[t] * self.growth[t] * shocks[t]).max(0.0);
            let period_cost = costs[t].max(0.0);

            cumulative_inflation += inflation[t];
            let factor = 1.0 - cumulative_inflation / PERIODS_PER_YEAR;

            let cash = (period_revenue - period_cost) * factor;
            discounted += cash * self.discount[t];
            cumulative_cash += cash;

            if break_even_period.is_none() && cumulative_cash - self.initial_investment > 0.0 {
                break_even_period = Some(t as u32 + 1);
            }
        }

        TrialOutcome {
            npv: discounted - self.initial_investment,
            roi: cumulative_cash / self.initial_investment * 100.0,
            break_even_period: break_even_period.unwrap_or(self.n_periods() as u32),
        }
    }
}

/// Growth trend `1 + 0.02 t` per period.
pub fn growth_trend(n_periods: usize) -> Vec<f64> {
    (0..n_periods)
        .map(|t| 1.0 + MONTHLY_GROWTH_RATE * t as f64)
        .collect()
}

/// Discount factors `1 / 1.1^(t / 12)` per period.
pub fn discount_factors(n_periods: usize) -> Vec<f64> {
    (0..n_periods)
        .map(|t| 1.0 / (1.0 + ANNUAL_DISCOUNT_RATE).powf(t as f64 / PERIODS_PER_YEAR))
        .collect()
}
