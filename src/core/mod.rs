pub mod classifier;

pub use classifier::{classify_numbers, parse_numbers, Classification, ClassifyError, Counts};
