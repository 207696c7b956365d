//! Screen flow for one calculator session.
//!
//! ```text
//! Entering ──submit──▶ Validating ──ok──▶ Computing ──ok──▶ Displaying
//!    ▲                     │                  │                 │
//!    └──── invalid ────────┘                  │                 │
//!    └──── estimator error ───────────────────┘                 │
//!    └──── back ────────────────────────────────────────────────┘
//! ```

use salary_core::{Estimator, EstimatorError, EstimatorRegistry, estimator::LocalEstimatorFactory};
use salary_remote::HttpEstimatorFactory;
use tracing::{info, warn};

use crate::collector::InputCollector;
use crate::config::AppConfig;
use crate::display::{self, DEFAULT_CURRENCY, ResultsView};
use crate::error::{NavigationError, SubmitError};
use crate::handoff::{HandoffStore, HandoffToken};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Entering,
    Validating,
    /// An estimate is in flight; further submissions are refused.
    Computing,
    Displaying(HandoffToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Registry with every estimator backend this front end ships with.
pub fn build_registry() -> EstimatorRegistry {
    let mut registry = EstimatorRegistry::new();
    registry.register(Box::new(LocalEstimatorFactory));
    registry.register(Box::new(HttpEstimatorFactory));
    registry
}

pub struct SalaryApp {
    screen: Screen,
    collector: InputCollector,
    estimator: Box<dyn Estimator>,
    handoff: HandoffStore,
    currency: String,
    status_message: Option<(String, MessageType)>,
}

impl SalaryApp {
    pub fn new(estimator: Box<dyn Estimator>) -> Self {
        Self {
            screen: Screen::default(),
            collector: InputCollector::new(),
            estimator,
            handoff: HandoffStore::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            status_message: None,
        }
    }

    /// Builds the app with the estimator backend named in `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, EstimatorError> {
        let estimator = build_registry().create(&config.estimator_config())?;
        info!(backend = estimator.name(), "estimator ready");
        Ok(Self::new(estimator).with_currency(&config.display.currency))
    }

    pub fn with_currency(
        mut self,
        currency: &str,
    ) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn with_handoff_store(
        mut self,
        store: HandoffStore,
    ) -> Self {
        self.handoff = store;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn collector(&self) -> &InputCollector {
        &self.collector
    }

    pub fn collector_mut(&mut self) -> &mut InputCollector {
        &mut self.collector
    }

    pub fn estimator_name(&self) -> &'static str {
        self.estimator.name()
    }

    /// Whether the submit button would be enabled.
    pub fn can_submit(&self) -> bool {
        self.screen != Screen::Computing && self.collector.is_valid()
    }

    /// Runs validation and the estimate, and parks the result for the
    /// results view.
    ///
    /// On failure the app is back on [`Screen::Entering`] with the error as
    /// its status message.
    pub async fn submit(&mut self) -> Result<HandoffToken, SubmitError> {
        if self.screen == Screen::Computing {
            warn!("submission refused while a calculation is in flight");
            return Err(SubmitError::InFlight);
        }
        if matches!(self.screen, Screen::Displaying(_)) {
            self.back();
        }

        self.screen = Screen::Validating;
        if let Err(err) = self.collector.validate() {
            self.screen = Screen::Entering;
            self.show_message(err.to_string(), MessageType::Error);
            return Err(err.into());
        }

        self.screen = Screen::Computing;
        self.clear_message();
        match self.collector.submit(self.estimator.as_ref()).await {
            Ok(payload) => {
                let token = self.handoff.put(payload);
                self.screen = Screen::Displaying(token);
                self.show_message("Calculation complete", MessageType::Success);
                Ok(token)
            }
            Err(err) => {
                warn!(error = %err, "calculation failed");
                self.screen = Screen::Entering;
                self.show_message(err.to_string(), MessageType::Error);
                Err(err)
            }
        }
    }

    /// Renders the results for the current screen.
    ///
    /// The handoff payload is consumed, so this succeeds once per
    /// submission. Without a payload the app returns to
    /// [`Screen::Entering`].
    pub fn show_results(&mut self) -> Result<ResultsView, NavigationError> {
        let payload = match self.screen {
            Screen::Displaying(token) => self.handoff.take(token),
            _ => None,
        };

        display::render(payload.as_ref(), &self.currency).inspect_err(|err| {
            self.screen = Screen::Entering;
            self.show_message(err.to_string(), MessageType::Info);
        })
    }

    /// Navigates to the results view for `token`, as a link would.
    pub fn open_results(
        &mut self,
        token: HandoffToken,
    ) -> Result<ResultsView, NavigationError> {
        self.screen = Screen::Displaying(token);
        self.show_results()
    }

    /// Returns to the entry form. Also clears a `Computing` state left by an
    /// abandoned submission. Form contents are kept; results not yet shown
    /// are discarded.
    pub fn back(&mut self) {
        if self.screen != Screen::Entering {
            info!(from = ?self.screen, "back to the entry form");
        }
        if let Screen::Displaying(token) = self.screen {
            self.handoff.take(token);
        }
        self.screen = Screen::Entering;
    }

    pub fn status_message(&self) -> Option<(&str, MessageType)> {
        self.status_message
            .as_ref()
            .map(|(msg, kind)| (msg.as_str(), *kind))
    }

    pub fn show_message(
        &mut self,
        msg: impl Into<String>,
        msg_type: MessageType,
    ) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use salary_core::estimator::LocalEstimator;

    use super::*;
    use crate::models::FormField;

    fn app() -> SalaryApp {
        SalaryApp::new(Box::new(LocalEstimator::new()))
    }

    fn fill(app: &mut SalaryApp) {
        let collector = app.collector_mut();
        collector.update_field(FormField::MonthlyIncome, "50000", None);
        collector.update_field(FormField::TaxFreeBonus, "3000", None);
        collector.update_field(FormField::TaxFreeExpenses, "12000", None);
    }

    #[test]
    fn registry_has_local_and_remote() {
        assert_eq!(build_registry().available_backends(), vec!["local", "remote"]);
    }

    #[test]
    fn from_config_uses_configured_backend_and_currency() {
        let mut config = AppConfig::default();
        config.estimator.backend = "remote".to_string();
        config.display.currency = "EUR".to_string();

        let app = SalaryApp::from_config(&config).unwrap();

        assert_eq!(app.estimator_name(), "remote");
        assert_eq!(app.currency, "EUR");
    }

    #[test]
    fn from_config_rejects_unknown_backend() {
        let mut config = AppConfig::default();
        config.estimator.backend = "abacus".to_string();

        assert!(matches!(
            SalaryApp::from_config(&config),
            Err(EstimatorError::Configuration(_))
        ));
    }

    #[test]
    fn can_submit_follows_validity() {
        let mut app = app();
        assert!(!app.can_submit());

        fill(&mut app);
        assert!(app.can_submit());
    }

    #[tokio::test]
    async fn invalid_submit_stays_on_form_with_message() {
        let mut app = app();

        let err = app.submit().await.unwrap_err();

        assert!(matches!(err, SubmitError::Validation(_)));
        assert_eq!(app.screen(), Screen::Entering);
        let (msg, kind) = app.status_message().unwrap();
        assert!(msg.starts_with("Please fill in all required fields"));
        assert_eq!(kind, MessageType::Error);
    }

    #[tokio::test]
    async fn successful_submit_displays_results_once() {
        let mut app = app();
        fill(&mut app);

        let token = app.submit().await.unwrap();
        assert_eq!(app.screen(), Screen::Displaying(token));

        let view = app.show_results().unwrap();
        assert_eq!(view.headline, "26,250 MAD");

        assert_eq!(app.show_results(), Err(NavigationError::MissingHandoff));
        assert_eq!(app.screen(), Screen::Entering);
    }

    #[tokio::test]
    async fn submit_from_results_discards_the_previous_payload() {
        let mut app = app();
        fill(&mut app);
        let first = app.submit().await.unwrap();

        let second = app.submit().await.unwrap();

        assert_ne!(first, second);
        assert_eq!(app.screen(), Screen::Displaying(second));
        assert_eq!(app.handoff.len(), 1);
        assert_eq!(app.open_results(first), Err(NavigationError::MissingHandoff));
    }

    #[tokio::test]
    async fn back_discards_unshown_results() {
        let mut app = app();
        fill(&mut app);
        app.submit().await.unwrap();

        app.back();

        assert!(app.handoff.is_empty());
    }

    #[tokio::test]
    async fn back_returns_to_form_and_keeps_input() {
        let mut app = app();
        fill(&mut app);
        app.submit().await.unwrap();

        app.back();

        assert_eq!(app.screen(), Screen::Entering);
        assert_eq!(app.collector().form().monthly_income, "50000");
    }
}
