pub mod answer_validator;
pub mod run_signals;

pub use answer_validator::{AnswerValidator, Validation};
pub use run_signals::{StartGate, StopSignal};
