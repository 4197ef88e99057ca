//! Business scenario value object.
//!
//! A [`Scenario`] is the immutable, validated description of a business
//! situation fed to the simulation engine. It can only be obtained through
//! [`ScenarioBuilder::build`] (or [`Scenario::from_spec`]), both of which run
//! the full validation, so every `Scenario` in existence satisfies:
//!
//! - `name` is non-empty
//! - `initial_investment > 0`
//! - `revenue_std >= 0`, `cost_std >= 0`, `market_volatility >= 0`
//! - `time_horizon >= 1`
//! - every numeric field is finite
//!
//! Modified scenarios are new values: see [`Scenario::with_parameter`] and
//! [`Scenario::to_builder`].

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Default annual inflation rate.
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;

/// Default market volatility (standard deviation of the multiplicative shock).
pub const DEFAULT_MARKET_VOLATILITY: f64 = 0.15;

/// Default time horizon in monthly periods.
pub const DEFAULT_TIME_HORIZON: u32 = 12;

/// Immutable business scenario.
///
/// # Examples
///
/// ```
/// use venture_core::types::Scenario;
///
/// let scenario = Scenario::builder()
///     .name("Retail expansion")
///     .initial_investment(100_000.0)
///     .revenue(25_000.0, 5_000.0)
///     .cost(15_000.0, 3_000.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(scenario.time_horizon(), 12);
/// assert_eq!(scenario.inflation_rate(), 0.03);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ScenarioSpec", into = "ScenarioSpec")
)]
pub struct Scenario {
    name: String,
    initial_investment: f64,
    revenue_mean: f64,
    revenue_std: f64,
    cost_mean: f64,
    cost_std: f64,
    inflation_rate: f64,
    market_volatility: f64,
    time_horizon: u32,
}

impl Scenario {
    /// Creates a new scenario builder.
    #[inline]
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder::default()
    }

    /// Validates a plain specification into a scenario.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first offending field.
    pub fn from_spec(spec: ScenarioSpec) -> Result<Self, ValidationError> {
        Scenario::builder()
            .name(spec.name)
            .initial_investment(spec.initial_investment)
            .revenue(spec.revenue_mean, spec.revenue_std)
            .cost(spec.cost_mean, spec.cost_std)
            .inflation_rate(spec.inflation_rate)
            .market_volatility(spec.market_volatility)
            .time_horizon_periods(spec.time_horizon)
            .build()
    }

    /// Returns the scenario label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the up-front investment.
    #[inline]
    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    /// Returns the mean revenue per period.
    #[inline]
    pub fn revenue_mean(&self) -> f64 {
        self.revenue_mean
    }

    /// Returns the standard deviation of revenue per period.
    #[inline]
    pub fn revenue_std(&self) -> f64 {
        self.revenue_std
    }

    /// Returns the mean cost per period.
    #[inline]
    pub fn cost_mean(&self) -> f64 {
        self.cost_mean
    }

    /// Returns the standard deviation of cost per period.
    #[inline]
    pub fn cost_std(&self) -> f64 {
        self.cost_std
    }

    /// Returns the annual inflation rate.
    #[inline]
    pub fn inflation_rate(&self) -> f64 {
        self.inflation_rate
    }

    /// Returns the market volatility.
    #[inline]
    pub fn market_volatility(&self) -> f64 {
        self.market_volatility
    }

    /// Returns the number of monthly periods simulated.
    #[inline]
    pub fn time_horizon(&self) -> u32 {
        self.time_horizon
    }

    /// Returns the current value of a sweepable parameter.
    pub fn parameter(&self, parameter: ScenarioParameter) -> f64 {
        match parameter {
            ScenarioParameter::InitialInvestment => self.initial_investment,
            ScenarioParameter::RevenueMean => self.revenue_mean,
            ScenarioParameter::RevenueStd => self.revenue_std,
            ScenarioParameter::CostMean => self.cost_mean,
            ScenarioParameter::CostStd => self.cost_std,
            ScenarioParameter::InflationRate => self.inflation_rate,
            ScenarioParameter::MarketVolatility => self.market_volatility,
            ScenarioParameter::TimeHorizon => f64::from(self.time_horizon),
        }
    }

    /// Returns a builder pre-populated with this scenario's fields.
    pub fn to_builder(&self) -> ScenarioBuilder {
        ScenarioBuilder {
            name: Some(self.name.clone()),
            initial_investment: Some(self.initial_investment),
            revenue: Some((self.revenue_mean, self.revenue_std)),
            cost: Some((self.cost_mean, self.cost_std)),
            inflation_rate: self.inflation_rate,
            market_volatility: self.market_volatility,
            time_horizon: i64::from(self.time_horizon),
        }
    }

    /// Returns a new scenario identical to this one except for `parameter`.
    ///
    /// `TimeHorizon` values are rounded to the nearest whole period.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the overridden value violates the
    /// scenario invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use venture_core::types::{Scenario, ScenarioParameter};
    ///
    /// let base = Scenario::builder()
    ///     .name("Base")
    ///     .initial_investment(50_000.0)
    ///     .revenue(15_000.0, 3_000.0)
    ///     .cost(8_000.0, 1_500.0)
    ///     .build()
    ///     .unwrap();
    ///
    /// let stressed = base.with_parameter(ScenarioParameter::CostMean, 10_000.0).unwrap();
    /// assert_eq!(stressed.cost_mean(), 10_000.0);
    /// assert_eq!(base.cost_mean(), 8_000.0);
    /// ```
    pub fn with_parameter(
        &self,
        parameter: ScenarioParameter,
        value: f64,
    ) -> Result<Self, ValidationError> {
        let builder = self.to_builder();
        let builder = match parameter {
            ScenarioParameter::InitialInvestment => builder.initial_investment(value),
            ScenarioParameter::RevenueMean => builder.revenue(value, self.revenue_std),
            ScenarioParameter::RevenueStd => builder.revenue(self.revenue_mean, value),
            ScenarioParameter::CostMean => builder.cost(value, self.cost_std),
            ScenarioParameter::CostStd => builder.cost(self.cost_mean, value),
            ScenarioParameter::InflationRate => builder.inflation_rate(value),
            ScenarioParameter::MarketVolatility => builder.market_volatility(value),
            ScenarioParameter::TimeHorizon => {
                if !value.is_finite() {
                    return Err(ValidationError::NonFinite {
                        field: "time_horizon",
                    });
                }
                builder.time_horizon_periods(value.round() as i64)
            }
        };
        builder.build()
    }
}

/// Builder for [`Scenario`].
///
/// `name`, `initial_investment`, `revenue` and `cost` are required; the
/// remaining fields fall back to the documented defaults.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    name: Option<String>,
    initial_investment: Option<f64>,
    revenue: Option<(f64, f64)>,
    cost: Option<(f64, f64)>,
    inflation_rate: f64,
    market_volatility: f64,
    time_horizon: i64,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self {
            name: None,
            initial_investment: None,
            revenue: None,
            cost: None,
            inflation_rate: DEFAULT_INFLATION_RATE,
            market_volatility: DEFAULT_MARKET_VOLATILITY,
            time_horizon: i64::from(DEFAULT_TIME_HORIZON),
        }
    }
}

impl ScenarioBuilder {
    /// Sets the scenario label.
    #[inline]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the up-front investment (must be positive).
    #[inline]
    pub fn initial_investment(mut self, amount: f64) -> Self {
        self.initial_investment = Some(amount);
        self
    }

    /// Sets the revenue distribution per period.
    #[inline]
    pub fn revenue(mut self, mean: f64, std: f64) -> Self {
        self.revenue = Some((mean, std));
        self
    }

    /// Sets the cost distribution per period.
    #[inline]
    pub fn cost(mut self, mean: f64, std: f64) -> Self {
        self.cost = Some((mean, std));
        self
    }

    /// Sets the annual inflation rate.
    #[inline]
    pub fn inflation_rate(mut self, rate: f64) -> Self {
        self.inflation_rate = rate;
        self
    }

    /// Sets the market volatility.
    #[inline]
    pub fn market_volatility(mut self, volatility: f64) -> Self {
        self.market_volatility = volatility;
        self
    }

    /// Sets the number of monthly periods.
    #[inline]
    pub fn time_horizon(mut self, periods: u32) -> Self {
        self.time_horizon = i64::from(periods);
        self
    }

    /// Sets the number of periods from a signed count, rejected at build
    /// time when not positive.
    #[inline]
    pub fn time_horizon_periods(mut self, periods: i64) -> Self {
        self.time_horizon = periods;
        self
    }

    /// Validates the fields and builds the scenario.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - a required field is missing
    /// - `name` is empty
    /// - any numeric field is not finite
    /// - `initial_investment <= 0`
    /// - `revenue_std < 0` or `cost_std < 0`
    /// - `market_volatility < 0`
    /// - `time_horizon <= 0`
    pub fn build(self) -> Result<Scenario, ValidationError> {
        let name = self
            .name
            .ok_or(ValidationError::MissingField { field: "name" })?;
        let initial_investment = self.initial_investment.ok_or(ValidationError::MissingField {
            field: "initial_investment",
        })?;
        let (revenue_mean, revenue_std) = self.revenue.ok_or(ValidationError::MissingField {
            field: "revenue",
        })?;
        let (cost_mean, cost_std) = self
            .cost
            .ok_or(ValidationError::MissingField { field: "cost" })?;

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        for (field, value) in [
            ("initial_investment", initial_investment),
            ("revenue_mean", revenue_mean),
            ("revenue_std", revenue_std),
            ("cost_mean", cost_mean),
            ("cost_std", cost_std),
            ("inflation_rate", self.inflation_rate),
            ("market_volatility", self.market_volatility),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
        }

        if initial_investment <= 0.0 {
            return Err(ValidationError::NonPositiveInvestment {
                value: initial_investment,
            });
        }
        if revenue_std < 0.0 {
            return Err(ValidationError::NegativeStdDev {
                field: "revenue_std",
                value: revenue_std,
            });
        }
        if cost_std < 0.0 {
            return Err(ValidationError::NegativeStdDev {
                field: "cost_std",
                value: cost_std,
            });
        }
        if self.market_volatility < 0.0 {
            return Err(ValidationError::NegativeVolatility {
                value: self.market_volatility,
            });
        }
        if self.time_horizon <= 0 {
            return Err(ValidationError::NonPositiveHorizon {
                value: self.time_horizon,
            });
        }
        let time_horizon =
            u32::try_from(self.time_horizon).map_err(|_| ValidationError::HorizonTooLong {
                value: self.time_horizon,
            })?;

        Ok(Scenario {
            name,
            initial_investment,
            revenue_mean,
            revenue_std,
            cost_mean,
            cost_std,
            inflation_rate: self.inflation_rate,
            market_volatility: self.market_volatility,
            time_horizon,
        })
    }
}

/// Plain, unvalidated scenario description.
///
/// Used as the wire shape for configuration files and serialisation; turn it
/// into a [`Scenario`] with [`Scenario::from_spec`] or `TryFrom`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    /// Scenario label
    pub name: String,
    /// Up-front investment
    pub initial_investment: f64,
    /// Mean revenue per period
    pub revenue_mean: f64,
    /// Revenue standard deviation per period
    pub revenue_std: f64,
    /// Mean cost per period
    pub cost_mean: f64,
    /// Cost standard deviation per period
    pub cost_std: f64,
    /// Annual inflation rate
    #[cfg_attr(feature = "serde", serde(default = "default_inflation_rate"))]
    pub inflation_rate: f64,
    /// Market volatility
    #[cfg_attr(feature = "serde", serde(default = "default_market_volatility"))]
    pub market_volatility: f64,
    /// Number of monthly periods
    #[cfg_attr(feature = "serde", serde(default = "default_time_horizon"))]
    pub time_horizon: i64,
}

#[cfg(feature = "serde")]
fn default_inflation_rate() -> f64 {
    DEFAULT_INFLATION_RATE
}

#[cfg(feature = "serde")]
fn default_market_volatility() -> f64 {
    DEFAULT_MARKET_VOLATILITY
}

#[cfg(feature = "serde")]
fn default_time_horizon() -> i64 {
    i64::from(DEFAULT_TIME_HORIZON)
}

impl TryFrom<ScenarioSpec> for Scenario {
    type Error = ValidationError;

    fn try_from(spec: ScenarioSpec) -> Result<Self, Self::Error> {
        Scenario::from_spec(spec)
    }
}

impl From<Scenario> for ScenarioSpec {
    fn from(scenario: Scenario) -> Self {
        ScenarioSpec {
            name: scenario.name,
            initial_investment: scenario.initial_investment,
            revenue_mean: scenario.revenue_mean,
            revenue_std: scenario.revenue_std,
            cost_mean: scenario.cost_mean,
            cost_std: scenario.cost_std,
            inflation_rate: scenario.inflation_rate,
            market_volatility: scenario.market_volatility,
            time_horizon: i64::from(scenario.time_horizon),
        }
    }
}

/// Scenario fields that can be swept in a sensitivity analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ScenarioParameter {
    /// Up-front investment
    InitialInvestment,
    /// Mean revenue per period
    RevenueMean,
    /// Revenue standard deviation
    RevenueStd,
    /// Mean cost per period
    CostMean,
    /// Cost standard deviation
    CostStd,
    /// Annual inflation rate
    InflationRate,
    /// Market volatility
    MarketVolatility,
    /// Number of monthly periods
    TimeHorizon,
}

impl ScenarioParameter {
    /// All sweepable parameters, in declaration order.
    pub const ALL: [ScenarioParameter; 8] = [
        ScenarioParameter::InitialInvestment,
        ScenarioParameter::RevenueMean,
        ScenarioParameter::RevenueStd,
        ScenarioParameter::CostMean,
        ScenarioParameter::CostStd,
        ScenarioParameter::InflationRate,
        ScenarioParameter::MarketVolatility,
        ScenarioParameter::TimeHorizon,
    ];

    /// Returns the snake_case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioParameter::InitialInvestment => "initial_investment",
            ScenarioParameter::RevenueMean => "revenue_mean",
            ScenarioParameter::RevenueStd => "revenue_std",
            ScenarioParameter::CostMean => "cost_mean",
            ScenarioParameter::CostStd => "cost_std",
            ScenarioParameter::InflationRate => "inflation_rate",
            ScenarioParameter::MarketVolatility => "market_volatility",
            ScenarioParameter::TimeHorizon => "time_horizon",
        }
    }
}

impl fmt::Display for ScenarioParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown parameter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown scenario parameter: {name}")]
pub struct UnknownParameter {
    /// Name that failed to parse
    pub name: String,
}

impl FromStr for ScenarioParameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        ScenarioParameter::ALL
            .into_iter()
            .find(|p| p.as_str() == normalised)
            .ok_or_else(|| UnknownParameter {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Scenario {
        Scenario::builder()
            .name("Test Scenario")
            .initial_investment(50_000.0)
            .revenue(15_000.0, 3_000.0)
            .cost(8_000.0, 1_500.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let scenario = base();
        assert_eq!(scenario.name(), "Test Scenario");
        assert_eq!(scenario.inflation_rate(), DEFAULT_INFLATION_RATE);
        assert_eq!(scenario.market_volatility(), DEFAULT_MARKET_VOLATILITY);
        assert_eq!(scenario.time_horizon(), DEFAULT_TIME_HORIZON);
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = Scenario::builder().name("x").build();
        assert!(matches!(
            result,
            Err(ValidationError::MissingField {
                field: "initial_investment"
            })
        ));

        let result = Scenario::builder()
            .name("x")
            .initial_investment(1.0)
            .revenue(1.0, 0.0)
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::MissingField { field: "cost" })
        ));
    }

    #[test]
    fn test_rejects_non_positive_investment() {
        for value in [0.0, -1.0] {
            let err = base()
                .to_builder()
                .initial_investment(value)
                .build()
                .unwrap_err();
            assert_eq!(err.field(), "initial_investment");
        }
    }

    #[test]
    fn test_rejects_negative_std_devs() {
        let err = base().to_builder().revenue(10.0, -0.1).build().unwrap_err();
        assert_eq!(err.field(), "revenue_std");

        let err = base().to_builder().cost(10.0, -5.0).build().unwrap_err();
        assert_eq!(err.field(), "cost_std");
    }

    #[test]
    fn test_zero_std_devs_allowed() {
        let scenario = base()
            .to_builder()
            .revenue(10.0, 0.0)
            .cost(5.0, 0.0)
            .market_volatility(0.0)
            .build()
            .unwrap();
        assert_eq!(scenario.revenue_std(), 0.0);
        assert_eq!(scenario.market_volatility(), 0.0);
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let err = base().to_builder().time_horizon(0).build().unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveHorizon { value: 0 });

        let err = base()
            .to_builder()
            .time_horizon_periods(-3)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveHorizon { value: -3 });
    }

    #[test]
    fn test_rejects_horizon_beyond_u32() {
        let err = base()
            .with_parameter(ScenarioParameter::TimeHorizon, 1e12)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::HorizonTooLong {
                value: 1_000_000_000_000
            }
        );
        assert_eq!(err.field(), "time_horizon");
        assert!(err.to_string().contains("at most 4294967295 periods"));

        let longest = base()
            .with_parameter(ScenarioParameter::TimeHorizon, f64::from(u32::MAX))
            .unwrap();
        assert_eq!(longest.time_horizon(), u32::MAX);
    }

    #[test]
    fn test_rejects_blank_name_and_non_finite() {
        let err = base().to_builder().name("   ").build().unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);

        let err = base()
            .to_builder()
            .inflation_rate(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "inflation_rate");

        let err = base()
            .to_builder()
            .market_volatility(-0.2)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "market_volatility");
    }

    #[test]
    fn test_with_parameter_returns_new_value() {
        let scenario = base();
        for parameter in ScenarioParameter::ALL {
            let value = match parameter {
                ScenarioParameter::TimeHorizon => 24.0,
                _ => scenario.parameter(parameter) * 1.5 + 0.01,
            };
            let modified = scenario.with_parameter(parameter, value).unwrap();
            assert_eq!(modified.parameter(parameter), value);
            for other in ScenarioParameter::ALL.iter().filter(|&&p| p != parameter) {
                assert_eq!(modified.parameter(*other), scenario.parameter(*other));
            }
        }
        // Original untouched
        assert_eq!(scenario, base());
    }

    #[test]
    fn test_with_parameter_revalidates() {
        let err = base()
            .with_parameter(ScenarioParameter::InitialInvestment, 0.0)
            .unwrap_err();
        assert_eq!(err.field(), "initial_investment");

        let err = base()
            .with_parameter(ScenarioParameter::TimeHorizon, 0.4)
            .unwrap_err();
        assert_eq!(err.field(), "time_horizon");

        let rounded = base()
            .with_parameter(ScenarioParameter::TimeHorizon, 17.6)
            .unwrap();
        assert_eq!(rounded.time_horizon(), 18);
    }

    #[test]
    fn test_spec_round_trip() {
        let scenario = base();
        let spec = ScenarioSpec::from(scenario.clone());
        assert_eq!(Scenario::try_from(spec).unwrap(), scenario);
    }

    #[test]
    fn test_parameter_parsing() {
        assert_eq!(
            "revenue_mean".parse::<ScenarioParameter>().unwrap(),
            ScenarioParameter::RevenueMean
        );
        assert_eq!(
            "Market-Volatility".parse::<ScenarioParameter>().unwrap(),
            ScenarioParameter::MarketVolatility
        );
        assert!("discount_rate".parse::<ScenarioParameter>().is_err());
        assert_eq!(ScenarioParameter::CostStd.to_string(), "cost_std");
    }
}
