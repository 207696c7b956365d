use serde::{Deserialize, Serialize};

use super::lossy_float;

/// One employee row, parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(with = "lossy_float")]
    pub gross_salary: f64,

    /// Collected from the form but not used by the estimate.
    #[serde(with = "lossy_float")]
    pub non_taxable_bonus: f64,
}

/// Parsed numeric record handed to an [`Estimator`](crate::Estimator).
///
/// The serde layout is the wire format of the calculator endpoint, so
/// field names and order follow the service contract (`taxDate` carries
/// the tax year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    #[serde(with = "lossy_float")]
    pub company_monthly_income: f64,

    /// Collected from the form but not used by the estimate.
    #[serde(with = "lossy_float")]
    pub non_taxable_bonus: f64,

    #[serde(rename = "taxDate")]
    pub tax_year: i32,

    #[serde(with = "lossy_float")]
    pub non_taxable_expense: f64,

    #[serde(default)]
    pub employees: Vec<EmployeeInput>,
}

impl CalculationInput {
    /// Sum of every employee's monthly gross salary.
    pub fn total_employee_gross_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.gross_salary).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> CalculationInput {
        CalculationInput {
            company_monthly_income: 50000.0,
            non_taxable_bonus: 3000.0,
            tax_year: 2025,
            non_taxable_expense: 12000.0,
            employees: vec![
                EmployeeInput {
                    gross_salary: 3000.0,
                    non_taxable_bonus: 500.0,
                },
                EmployeeInput {
                    gross_salary: 4500.0,
                    non_taxable_bonus: 0.0,
                },
            ],
        }
    }

    #[test]
    fn serializes_with_service_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            value,
            json!({
                "companyMonthlyIncome": 50000.0,
                "nonTaxableBonus": 3000.0,
                "taxDate": 2025,
                "nonTaxableExpense": 12000.0,
                "employees": [
                    { "grossSalary": 3000.0, "nonTaxableBonus": 500.0 },
                    { "grossSalary": 4500.0, "nonTaxableBonus": 0.0 }
                ]
            })
        );
    }

    #[test]
    fn missing_employees_defaults_to_empty() {
        let input: CalculationInput = serde_json::from_value(json!({
            "companyMonthlyIncome": 1000,
            "nonTaxableBonus": 0,
            "taxDate": 2024,
            "nonTaxableExpense": 0
        }))
        .unwrap();

        assert!(input.employees.is_empty());
        assert_eq!(input.tax_year, 2024);
    }

    #[test]
    fn total_employee_gross_salary_sums_rows() {
        assert_eq!(sample().total_employee_gross_salary(), 7500.0);
    }
}
