//! Client side: local validation, the HTTP API client, and the presenter
//! that drives one submission at a time from input to rendered output.

pub mod api;
pub mod presenter;
pub mod validate;

pub use api::{ApiClient, CountResponse, HealthReport, TransportError};
pub use presenter::{Presenter, SubmissionState};
pub use validate::{validate_input, ValidationError};
