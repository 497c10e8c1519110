use crate::client::api::{ApiClient, CountResponse, TransportError};
use crate::client::validate::{validate_input, ValidationError};

/// State of the current submission.
///
/// `Idle -> Validating -> (ValidationFailed | Calling) -> (Success | TransportFailed)`;
/// every terminal state re-enters the cycle on the next submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Calling,
    ValidationFailed(ValidationError),
    Success(CountResponse),
    TransportFailed(TransportError),
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::ValidationFailed(_)
                | SubmissionState::Success(_)
                | SubmissionState::TransportFailed(_)
        )
    }
}

/// Drives submissions against the service and renders the outcome.
///
/// `submit` takes `&mut self`, so a session can never have two submissions
/// in flight at once.
pub struct Presenter {
    client: ApiClient,
    state: SubmissionState,
}

impl Presenter {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Run one submission to a terminal state: validate locally first, and
    /// only call the service when validation passes. No automatic retries;
    /// a failed call surfaces immediately.
    pub async fn submit(&mut self, raw: &str) -> &SubmissionState {
        self.state = SubmissionState::Validating;

        if let Err(e) = validate_input(raw) {
            self.state = SubmissionState::ValidationFailed(e);
            return &self.state;
        }

        self.state = SubmissionState::Calling;
        self.state = match self.client.count_numbers(raw).await {
            Ok(response) => SubmissionState::Success(response),
            Err(e) => SubmissionState::TransportFailed(e),
        };

        &self.state
    }

    /// Render the current state for the user. Every failure kind keeps its
    /// specific message; nothing collapses into a generic "request failed".
    pub fn render(&self) -> String {
        match &self.state {
            SubmissionState::Idle => {
                "Enter comma-separated numbers to classify (e.g. 1,2,-3,0).".to_string()
            }
            SubmissionState::Validating => "Validating input...".to_string(),
            SubmissionState::Calling => "Calling the number counting API...".to_string(),
            SubmissionState::ValidationFailed(e) => format!("❌ {}", e),
            SubmissionState::TransportFailed(e) => format!("❌ {}", e),
            SubmissionState::Success(response) => render_success(response),
        }
    }
}

fn render_success(response: &CountResponse) -> String {
    let numbers = response
        .input_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "📊 Results\n\
         Input numbers: [{}]\n\
         Total numbers: {}\n\
         ✅ Positive: {}\n\
         ❌ Negative: {}\n\
         ⭕ Zero: {}",
        numbers,
        response.counts.total,
        response.counts.positive,
        response.counts.negative,
        response.counts.zero,
    )
}
