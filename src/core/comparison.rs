//! # Fuel Comparison
//!
//! The one business rule in Fuelcheck: ethanol is worth buying when its
//! price is less than 70% of the gasoline price. Everything else in the
//! app exists to collect two numbers and display this verdict.
//!
//! `ComparisonResult::from_input` is the `calculate()` operation: it takes
//! the raw field text, validates it, and either produces an immutable
//! result or an [`InvalidInput`] describing what was wrong. Both the TUI
//! form and the one-shot CLI mode go through this single entry point.

use std::fmt;

/// Ethanol is recommended when `ethanol / gasoline` is strictly below this.
pub const ETHANOL_THRESHOLD: f64 = 0.7;

/// Which fuel the user should buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Ethanol,
    Gasoline,
}

impl Recommendation {
    /// Human-readable verdict shown on the result screen and in CLI output.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Ethanol => "Ethanol is the better buy",
            Recommendation::Gasoline => "Gasoline is the better buy",
        }
    }
}

/// The two input fields, used to point error messages at the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ethanol,
    Gasoline,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Ethanol => "Ethanol",
            Field::Gasoline => "Gasoline",
        }
    }
}

/// Validation failure from [`ComparisonResult::from_input`].
///
/// Handling is fully local: the caller shows the message and stays on the
/// input screen. Nothing else in the app produces errors at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The field was empty or did not parse as a finite number.
    NotANumber { field: Field },
    /// A gasoline price of zero would make the ratio infinite.
    GasolineZero,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotANumber { field } => write!(
                f,
                "{} price is not a valid number. Enter a price like 4.60.",
                field.label()
            ),
            InvalidInput::GasolineZero => {
                write!(f, "Gasoline price cannot be zero.")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Outcome of one calculation. Immutable once constructed and fully
/// determined by the two input prices; carried as the Result screen's
/// navigation payload and discarded on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub ethanol_price: f64,
    pub gasoline_price: f64,
    pub ratio: f64,
    pub recommendation: Recommendation,
}

impl ComparisonResult {
    /// Validate the raw field text and compute the verdict.
    ///
    /// Parsing is deliberately permissive about range: negative prices are
    /// accepted and produce a numeric ratio. A zero gasoline price is
    /// rejected because the ratio would be infinite.
    pub fn from_input(ethanol: &str, gasoline: &str) -> Result<Self, InvalidInput> {
        let ethanol_price = parse_price(ethanol, Field::Ethanol)?;
        let gasoline_price = parse_price(gasoline, Field::Gasoline)?;

        if gasoline_price == 0.0 {
            return Err(InvalidInput::GasolineZero);
        }

        let ratio = ethanol_price / gasoline_price;
        let recommendation = if ratio < ETHANOL_THRESHOLD {
            Recommendation::Ethanol
        } else {
            Recommendation::Gasoline
        };

        Ok(Self {
            ethanol_price,
            gasoline_price,
            ratio,
            recommendation,
        })
    }
}

fn parse_price(text: &str, field: Field) -> Result<f64, InvalidInput> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInput::NotANumber { field }),
    }
}
