//! Best-monthly-salary simulation for a solo company owner.
//!
//! Given the company's monthly income, its non-taxable expenses, and the
//! gross salaries of any employees, the simulation derives the owner's
//! salary, yearly profit, taxes, and margin.
//!
//! # Lines
//!
//! | Metric             | Formula                                                        |
//! |--------------------|----------------------------------------------------------------|
//! | `gross_salary`     | income × gross salary ratio (70%)                              |
//! | `net_owner_salary` | gross salary × (1 − owner tax rate (25%))                      |
//! | `yearly_profit`    | (income − Σ employee gross − non-taxable expense) × 12         |
//! | `total_taxes`      | gross salary × owner tax rate × 12                             |
//! | `net_profit`       | yearly profit − total taxes                                    |
//! | `profit_margin`    | net profit ÷ (income × 12) × 100                               |
//!
//! Bonuses are accepted on the input but take no part in the result.
//!
//! Nothing is clamped. Zero income gives a `NaN` margin (0 ÷ 0), and a
//! negative income flows straight through every line.
//!
//! # Example
//!
//! ```
//! use salary_core::{CalculationInput, estimate};
//!
//! let input = CalculationInput {
//!     company_monthly_income: 50000.0,
//!     non_taxable_bonus: 3000.0,
//!     tax_year: 2025,
//!     non_taxable_expense: 12000.0,
//!     employees: vec![],
//! };
//!
//! let result = estimate(&input);
//!
//! assert_eq!(result.gross_salary, 35000.0);
//! assert_eq!(result.net_owner_salary, 26250.0);
//! assert_eq!(result.yearly_profit, 456000.0);
//! ```

use tracing::{debug, warn};

use crate::models::{CalculationInput, CalculationResult};

/// Constants of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRates {
    /// Share of monthly income paid out as the owner's gross salary.
    pub gross_salary_ratio: f64,

    /// Flat tax rate on the owner's gross salary.
    pub owner_tax_rate: f64,

    /// Annualization factor for monthly figures.
    pub months_per_year: u32,
}

impl SimulationRates {
    pub const CANONICAL: Self = Self {
        gross_salary_ratio: 0.7,
        owner_tax_rate: 0.25,
        months_per_year: 12,
    };
}

impl Default for SimulationRates {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Calculator for the monthly simulation.
#[derive(Debug, Clone, Default)]
pub struct MonthlySimulation {
    rates: SimulationRates,
}

impl MonthlySimulation {
    /// The simulation every flow uses.
    pub fn canonical() -> Self {
        Self {
            rates: SimulationRates::CANONICAL,
        }
    }

    /// Runs every line of the simulation.
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> CalculationResult {
        let income = input.company_monthly_income;
        if income.is_nan() || income <= 0.0 {
            warn!(
                income = %income,
                "company monthly income is not positive; profit margin is undefined"
            );
        }

        let gross_salary = self.gross_salary(income);
        let net_owner_salary = self.net_owner_salary(gross_salary);
        let yearly_profit = self.yearly_profit(input);
        let total_taxes = self.total_taxes(gross_salary);
        let net_profit = yearly_profit - total_taxes;
        let profit_margin = self.profit_margin(net_profit, income);

        debug!(
            tax_year = input.tax_year,
            employees = input.employees.len(),
            gross_salary,
            net_profit,
            "monthly simulation complete"
        );

        CalculationResult {
            gross_salary,
            net_owner_salary,
            yearly_profit,
            total_taxes,
            net_profit,
            profit_margin,
        }
    }

    fn annualize(
        &self,
        monthly: f64,
    ) -> f64 {
        monthly * f64::from(self.rates.months_per_year)
    }

    fn gross_salary(
        &self,
        income: f64,
    ) -> f64 {
        income * self.rates.gross_salary_ratio
    }

    fn net_owner_salary(
        &self,
        gross_salary: f64,
    ) -> f64 {
        gross_salary * (1.0 - self.rates.owner_tax_rate)
    }

    fn yearly_profit(
        &self,
        input: &CalculationInput,
    ) -> f64 {
        self.annualize(
            input.company_monthly_income
                - input.total_employee_gross_salary()
                - input.non_taxable_expense,
        )
    }

    fn total_taxes(
        &self,
        gross_salary: f64,
    ) -> f64 {
        self.annualize(gross_salary * self.rates.owner_tax_rate)
    }

    fn profit_margin(
        &self,
        net_profit: f64,
        income: f64,
    ) -> f64 {
        net_profit / self.annualize(income) * 100.0
    }
}

/// Runs the canonical simulation.
pub fn estimate(input: &CalculationInput) -> CalculationResult {
    MonthlySimulation::canonical().calculate(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::EmployeeInput;

    const EPSILON: f64 = 1e-9;

    fn assert_close(
        actual: f64,
        expected: f64,
    ) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    fn input(
        income: f64,
        expense: f64,
        employee_salaries: &[f64],
    ) -> CalculationInput {
        CalculationInput {
            company_monthly_income: income,
            non_taxable_bonus: 3000.0,
            tax_year: 2025,
            non_taxable_expense: expense,
            employees: employee_salaries
                .iter()
                .map(|&gross_salary| EmployeeInput {
                    gross_salary,
                    non_taxable_bonus: 250.0,
                })
                .collect(),
        }
    }

    // =========================================================================
    // reference scenario
    // =========================================================================

    #[test]
    fn reference_scenario_without_employees() {
        let result = estimate(&input(50000.0, 12000.0, &[]));

        assert_close(result.gross_salary, 35000.0);
        assert_close(result.net_owner_salary, 26250.0);
        assert_close(result.yearly_profit, 456000.0);
        assert_close(result.total_taxes, 105000.0);
        assert_close(result.net_profit, 351000.0);
        assert_close(result.profit_margin, 58.5);
    }

    #[test]
    fn employee_salaries_reduce_yearly_profit() {
        let result = estimate(&input(50000.0, 12000.0, &[3000.0, 5000.0]));

        assert_close(result.yearly_profit, (50000.0 - 8000.0 - 12000.0) * 12.0);
        assert_close(result.gross_salary, 35000.0);
        assert_close(result.total_taxes, 105000.0);
    }

    // =========================================================================
    // identities
    // =========================================================================

    #[test]
    fn identities_hold_across_incomes() {
        for income in [1.0, 999.99, 12345.67, 50000.0, 2_500_000.0] {
            let result = estimate(&input(income, 800.0, &[1200.0]));

            assert_close(result.gross_salary, income * 0.7);
            assert_close(result.net_owner_salary, result.gross_salary * 0.75);
            assert_close(result.total_taxes, result.gross_salary * 3.0);
            assert_eq!(result.net_profit, result.yearly_profit - result.total_taxes);
        }
    }

    #[test]
    fn bonuses_do_not_affect_the_result() {
        let base = input(40000.0, 5000.0, &[2000.0]);
        let mut with_bonuses = base.clone();
        with_bonuses.non_taxable_bonus = 99999.0;
        with_bonuses.employees[0].non_taxable_bonus = 99999.0;

        assert_eq!(estimate(&base), estimate(&with_bonuses));
    }

    // =========================================================================
    // degenerate inputs
    // =========================================================================

    #[test]
    fn zero_income_yields_nan_margin() {
        let result = estimate(&input(0.0, 0.0, &[]));

        assert_eq!(result.gross_salary, 0.0);
        assert_eq!(result.net_profit, 0.0);
        assert!(result.profit_margin.is_nan());
    }

    #[test]
    fn zero_income_with_expenses_yields_infinite_margin() {
        let result = estimate(&input(0.0, 1000.0, &[]));

        assert_eq!(result.profit_margin, f64::NEG_INFINITY);
    }

    #[test]
    fn nan_employee_salary_poisons_profit_lines_only() {
        let result = estimate(&input(50000.0, 12000.0, &[f64::NAN]));

        assert_close(result.gross_salary, 35000.0);
        assert_close(result.total_taxes, 105000.0);
        assert!(result.yearly_profit.is_nan());
        assert!(result.net_profit.is_nan());
        assert!(result.profit_margin.is_nan());
    }

    // =========================================================================
    // rates
    // =========================================================================

    #[test]
    fn canonical_rates() {
        assert_eq!(
            SimulationRates::default(),
            SimulationRates {
                gross_salary_ratio: 0.7,
                owner_tax_rate: 0.25,
                months_per_year: 12,
            }
        );
    }
}
