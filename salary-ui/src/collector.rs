//! Entry-form state and the submission step.
//!
//! The collector owns the raw strings for one form session. It checks that
//! the required fields are present, parses everything into a
//! [`CalculationInput`], and asks an [`Estimator`] for the result.

use chrono::Datelike;
use salary_core::{CalculationInput, EmployeeInput, Estimator};
use tracing::{debug, info, warn};

use crate::error::{SubmitError, ValidationError};
use crate::models::{EmployeeEntry, FormField, HandoffPayload, RawInput};
use crate::utils::parse_amount;

/// Current calendar year in local time; used as the tax year.
pub fn current_tax_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    form: RawInput,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RawInput {
        &self.form
    }

    /// Sets one field.
    ///
    /// Top-level fields take no `employee_index`; employee fields need the
    /// index of an existing row. Any other combination leaves the form
    /// untouched and returns `false`.
    pub fn update_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
        employee_index: Option<usize>,
    ) -> bool {
        let slot = match (field, employee_index) {
            (FormField::MonthlyIncome, None) => Some(&mut self.form.monthly_income),
            (FormField::TaxFreeBonus, None) => Some(&mut self.form.tax_free_bonus),
            (FormField::TaxFreeExpenses, None) => Some(&mut self.form.tax_free_expenses),
            (FormField::EmployeeGrossSalary, Some(i)) => {
                self.form.employees.get_mut(i).map(|row| &mut row.gross_salary)
            }
            (FormField::EmployeeTaxFreeBonus, Some(i)) => {
                self.form.employees.get_mut(i).map(|row| &mut row.tax_free_bonus)
            }
            _ => None,
        };

        match slot {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => self.ignore_update(field, employee_index),
        }
    }

    fn ignore_update(
        &self,
        field: FormField,
        employee_index: Option<usize>,
    ) -> bool {
        warn!(
            field = field.id(),
            ?employee_index,
            rows = self.form.employees.len(),
            "ignoring update for a field that does not exist"
        );
        false
    }

    /// Appends an empty employee row and returns the new row count.
    pub fn add_employee_row(&mut self) -> usize {
        self.form.employees.push(EmployeeEntry::default());
        debug!(rows = self.form.employees.len(), "employee row added");
        self.form.employees.len()
    }

    pub fn set_has_employees(
        &mut self,
        has_employees: bool,
    ) {
        self.form.has_employees = has_employees;
    }

    /// Required fields that are blank after trimming, in form order.
    ///
    /// Employee fields are never required.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| {
                let value = match field {
                    FormField::MonthlyIncome => &self.form.monthly_income,
                    FormField::TaxFreeBonus => &self.form.tax_free_bonus,
                    _ => &self.form.tax_free_expenses,
                };
                value.trim().is_empty()
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Parses the form. Unparseable strings become `NaN`.
    pub fn to_calculation_input(
        &self,
        tax_year: i32,
    ) -> CalculationInput {
        CalculationInput {
            company_monthly_income: parse_amount(&self.form.monthly_income),
            non_taxable_bonus: parse_amount(&self.form.tax_free_bonus),
            tax_year,
            non_taxable_expense: parse_amount(&self.form.tax_free_expenses),
            employees: self
                .form
                .active_employees()
                .iter()
                .map(|row| EmployeeInput {
                    gross_salary: parse_amount(&row.gross_salary),
                    non_taxable_bonus: parse_amount(&row.tax_free_bonus),
                })
                .collect(),
        }
    }

    /// Validates, estimates for the current tax year, and packages the
    /// result for the results view.
    pub async fn submit(
        &self,
        estimator: &dyn Estimator,
    ) -> Result<HandoffPayload, SubmitError> {
        self.submit_for_year(estimator, current_tax_year()).await
    }

    pub async fn submit_for_year(
        &self,
        estimator: &dyn Estimator,
        tax_year: i32,
    ) -> Result<HandoffPayload, SubmitError> {
        self.validate()?;

        let input = self.to_calculation_input(tax_year);
        info!(
            estimator = estimator.name(),
            tax_year,
            employees = input.employees.len(),
            "submitting calculation"
        );

        let result = estimator.estimate(&input).await?;

        Ok(HandoffPayload {
            result,
            raw_input: self.form.echo(),
        })
    }
}
