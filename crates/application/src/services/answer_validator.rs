use dnsload_domain::{Answer, QueryRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Verified,
    Incorrect { observed: String },
}

impl Validation {
    pub fn is_verified(&self) -> bool {
        matches!(self, Validation::Verified)
    }
}

/// Checks the first answer of a response against a query's expected set.
pub struct AnswerValidator;

impl AnswerValidator {
    pub fn validate(query: &QueryRecord, answers: &[Answer]) -> Validation {
        let observed = answers
            .first()
            .map(Answer::primary_value)
            .unwrap_or_default();

        if query.expects(&observed) {
            Validation::Verified
        } else {
            Validation::Incorrect { observed }
        }
    }
}
