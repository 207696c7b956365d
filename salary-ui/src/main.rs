use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use salary_ui::config::AppConfig;
use salary_ui::logging;
use salary_ui::models::FormField;
use salary_ui::{InputCollector, SalaryApp, SubmitError};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Salary and tax estimator for solo entrepreneurs.
///
/// Fills in the calculator form from the flags below, runs the estimate on
/// the configured backend and prints the results.
#[derive(Debug, Parser)]
#[command(name = "solopay", version)]
struct Cli {
    /// Company monthly income.
    #[arg(long, allow_hyphen_values = true)]
    monthly_income: Option<String>,

    /// Tax-free bonus.
    #[arg(long, allow_hyphen_values = true)]
    tax_free_bonus: Option<String>,

    /// Tax-free expenses.
    #[arg(long, allow_hyphen_values = true)]
    tax_free_expenses: Option<String>,

    /// One employee, as gross salary with an optional tax-free bonus.
    /// Repeat for every employee.
    #[arg(long = "employee", value_name = "GROSS[:BONUS]", allow_hyphen_values = true)]
    employees: Vec<String>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Estimator backend (`local` or `remote`).
    #[arg(long)]
    backend: Option<String>,

    /// Calculator service address for the `remote` backend.
    #[arg(long)]
    base_url: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(backend) = &self.backend {
            config.estimator.backend = backend.trim().to_lowercase();
        }
        if let Some(url) = &self.base_url {
            config.estimator.base_url = url.trim().to_string();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    fn fill_form(
        &self,
        collector: &mut InputCollector,
    ) {
        let top_level = [
            (FormField::MonthlyIncome, &self.monthly_income),
            (FormField::TaxFreeBonus, &self.tax_free_bonus),
            (FormField::TaxFreeExpenses, &self.tax_free_expenses),
        ];
        for (field, value) in top_level {
            if let Some(value) = value {
                collector.update_field(field, value.as_str(), None);
            }
        }

        collector.set_has_employees(!self.employees.is_empty());
        for (i, employee) in self.employees.iter().enumerate() {
            if i > 0 {
                collector.add_employee_row();
            }
            let (gross, bonus) = employee.split_once(':').unwrap_or((employee, ""));
            collector.update_field(FormField::EmployeeGrossSalary, gross, Some(i));
            collector.update_field(FormField::EmployeeTaxFreeBonus, bonus, Some(i));
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging("info");

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);

    logging::apply_configured_level(&config.logging.level).context("applying [logging] level")?;
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration resolved");

    let mut app = SalaryApp::from_config(&config).context("selecting estimator backend")?;
    cli.fill_form(app.collector_mut());

    if let Err(err) = app.submit().await {
        eprintln!("{err}");
        if let SubmitError::Validation(validation) = &err {
            for hint in validation.flag_hints() {
                eprintln!("{hint}");
            }
        }
        return Ok(ExitCode::FAILURE);
    }

    match app.show_results() {
        Ok(view) => {
            println!("{view}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(error = %err, "results unavailable after a successful submission");
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
