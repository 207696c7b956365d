use std::fmt;

/// One employee row as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeEntry {
    pub gross_salary: String,
    pub tax_free_bonus: String,
}

/// Unparsed form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub monthly_income: String,
    pub tax_free_bonus: String,
    pub tax_free_expenses: String,

    /// The "You have employees?" toggle. Rows are kept while it is off.
    pub has_employees: bool,
    pub employees: Vec<EmployeeEntry>,
}

/// A fresh form: employees switched on with one empty row.
impl Default for RawInput {
    fn default() -> Self {
        Self {
            monthly_income: String::new(),
            tax_free_bonus: String::new(),
            tax_free_expenses: String::new(),
            has_employees: true,
            employees: vec![EmployeeEntry::default()],
        }
    }
}

impl RawInput {
    /// Rows that take part in a calculation.
    pub fn active_employees(&self) -> &[EmployeeEntry] {
        if self.has_employees {
            &self.employees
        } else {
            &[]
        }
    }

    /// Copy handed to the results view; hidden rows are dropped.
    pub fn echo(&self) -> RawInput {
        RawInput {
            employees: self.active_employees().to_vec(),
            ..self.clone()
        }
    }
}

impl fmt::Display for RawInput {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Monthly income:     {}", self.monthly_income)?;
        writeln!(f, "Tax-free bonus:     {}", self.tax_free_bonus)?;
        write!(f, "Tax-free expenses:  {}", self.tax_free_expenses)?;
        for (i, employee) in self.active_employees().iter().enumerate() {
            write!(
                f,
                "\nEmployee {}:         gross {}, tax-free bonus {}",
                i + 1,
                employee.gross_salary,
                employee.tax_free_bonus
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_form_has_one_empty_employee_row() {
        let form = RawInput::default();

        assert!(form.has_employees);
        assert_eq!(form.employees, vec![EmployeeEntry::default()]);
    }

    #[test]
    fn echo_drops_rows_when_toggle_is_off() {
        let form = RawInput {
            monthly_income: "50000".to_string(),
            has_employees: false,
            ..RawInput::default()
        };

        let echo = form.echo();

        assert!(echo.employees.is_empty());
        assert_eq!(echo.monthly_income, "50000");
        assert_eq!(form.employees.len(), 1);
    }

    #[test]
    fn display_lists_active_employees() {
        let form = RawInput {
            monthly_income: "50000".to_string(),
            tax_free_bonus: "3000".to_string(),
            tax_free_expenses: "12000".to_string(),
            has_employees: true,
            employees: vec![EmployeeEntry {
                gross_salary: "3000".to_string(),
                tax_free_bonus: "200".to_string(),
            }],
        };

        let text = form.to_string();

        assert!(text.contains("Monthly income:     50000"));
        assert!(text.contains("Employee 1:         gross 3000, tax-free bonus 200"));
    }
}
