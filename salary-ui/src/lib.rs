pub mod app;
pub mod collector;
pub mod config;
pub mod display;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod models;
pub mod utils;

pub use app::{MessageType, SalaryApp, Screen};
pub use collector::InputCollector;
pub use error::{NavigationError, SubmitError, ValidationError};
