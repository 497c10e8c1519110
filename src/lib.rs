pub mod client;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use client::{ApiClient, Presenter, SubmissionState};
pub use config::{CliConfig, ServerConfig};
pub use core::{classify_numbers, Classification, ClassifyError, Counts};
pub use server::create_router;
