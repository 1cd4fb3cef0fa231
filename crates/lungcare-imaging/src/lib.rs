pub mod classifier;
pub mod templates;

pub use classifier::{ImageClassifier, MockImageClassifier};
pub use templates::{MODEL_VERSION, OutcomeTemplate, TEMPLATES};
