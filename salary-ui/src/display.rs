//! Results view: turns a handoff payload into display strings.

use std::fmt;

use rust_decimal::Decimal;
use salary_core::calculations::common::{round_cents, round_whole};
use tracing::warn;

use crate::error::NavigationError;
use crate::models::{HandoffPayload, RawInput};
use crate::utils::group_thousands;

pub const DEFAULT_CURRENCY: &str = "MAD";

/// Shown in place of a value that is not a finite number.
pub const UNAVAILABLE: &str = "—";

pub const HEADLINE_LABEL: &str = "Your Tax-Optimized Salary (Net salary)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Everything the results screen shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub headline: String,
    pub metrics: Vec<Metric>,
    pub inputs: RawInput,
}

impl ResultsView {
    pub fn metric(
        &self,
        label: &str,
    ) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }
}

impl fmt::Display for ResultsView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{HEADLINE_LABEL}")?;
        writeln!(f, "  {}", self.headline)?;
        writeln!(f)?;
        for metric in &self.metrics {
            writeln!(f, "{:<20}{}", metric.label, metric.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Calculated from")?;
        write!(f, "{}", self.inputs)
    }
}

/// Builds the results view.
///
/// # Errors
/// [`NavigationError::MissingHandoff`] when there is no payload, e.g. the
/// results view was opened directly. The caller goes back to the form.
pub fn render(
    payload: Option<&HandoffPayload>,
    currency: &str,
) -> Result<ResultsView, NavigationError> {
    let Some(payload) = payload else {
        warn!("results view opened without a calculation");
        return Err(NavigationError::MissingHandoff);
    };
    let result = &payload.result;

    Ok(ResultsView {
        headline: format!("{} {currency}", format_whole(result.net_owner_salary)),
        metrics: vec![
            Metric {
                label: "Gross Salary",
                value: format_currency(result.gross_salary, currency),
            },
            Metric {
                label: "Yearly profit",
                value: format_currency(result.yearly_profit, currency),
            },
            Metric {
                label: "Corporate taxes",
                value: format_currency(result.total_taxes, currency),
            },
            Metric {
                label: "Yearly net profit",
                value: format_currency(result.net_profit, currency),
            },
            Metric {
                label: "Profit margin",
                value: format_percent(result.profit_margin),
            },
        ],
        inputs: payload.raw_input.clone(),
    })
}

/// Drops the sign of a zero so that `-0.001` prints as `0.00`.
fn unsigned_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

/// Two decimals with separators; `None` for non-finite values.
///
/// Magnitudes that [`Decimal`] cannot hold at two decimals are formatted
/// from the `f64` directly.
fn fixed_two(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let rounded = round_cents(value).map(unsigned_zero).and_then(|mut d| {
        d.rescale(2);
        (d.scale() == 2).then_some(d)
    });
    let text = match rounded {
        Some(d) => d.to_string(),
        None => format!("{value:.2}"),
    };
    Some(group_thousands(&text))
}

/// `MAD 35,000.00`
pub fn format_currency(
    value: f64,
    currency: &str,
) -> String {
    match fixed_two(value) {
        Some(amount) => format!("{currency} {amount}"),
        None => UNAVAILABLE.to_string(),
    }
}

/// `26,250`
pub fn format_whole(value: f64) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }
    match round_whole(value) {
        Some(rounded) => group_thousands(&unsigned_zero(rounded).to_string()),
        None => group_thousands(&format!("{value:.0}")),
    }
}

/// `58.50%`
pub fn format_percent(value: f64) -> String {
    match fixed_two(value) {
        Some(amount) => format!("{amount}%"),
        None => UNAVAILABLE.to_string(),
    }
}
