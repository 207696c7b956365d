use std::fmt;

/// Every input on the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    MonthlyIncome,
    TaxFreeBonus,
    TaxFreeExpenses,
    EmployeeGrossSalary,
    EmployeeTaxFreeBonus,
}

impl FormField {
    /// Fields that must be filled in before a calculation, in form order.
    pub const REQUIRED: [FormField; 3] = [
        FormField::MonthlyIncome,
        FormField::TaxFreeBonus,
        FormField::TaxFreeExpenses,
    ];

    pub fn all() -> &'static [FormField] {
        &[
            FormField::MonthlyIncome,
            FormField::TaxFreeBonus,
            FormField::TaxFreeExpenses,
            FormField::EmployeeGrossSalary,
            FormField::EmployeeTaxFreeBonus,
        ]
    }

    /// Stable form identifier, e.g. `"monthly-income"`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::MonthlyIncome => "monthly-income",
            Self::TaxFreeBonus => "tax-free-bonus",
            Self::TaxFreeExpenses => "tax-free-expenses",
            Self::EmployeeGrossSalary => "employee-gross-salary",
            Self::EmployeeTaxFreeBonus => "employee-tax-free-bonus",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MonthlyIncome => "Monthly income",
            Self::TaxFreeBonus => "Tax-free bonus",
            Self::TaxFreeExpenses => "Tax-free expenses",
            Self::EmployeeGrossSalary => "Employee's gross salary",
            Self::EmployeeTaxFreeBonus => "Employee's tax-free bonus",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::MonthlyIncome => "Ex: 50000",
            Self::TaxFreeBonus => "Ex: 3000",
            Self::TaxFreeExpenses => "Ex: 12000",
            Self::EmployeeGrossSalary => "Ex: 3000",
            Self::EmployeeTaxFreeBonus => "Ex: 3000",
        }
    }

    /// Employee fields live on a row and need a row index.
    pub fn is_employee_field(&self) -> bool {
        matches!(self, Self::EmployeeGrossSalary | Self::EmployeeTaxFreeBonus)
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
