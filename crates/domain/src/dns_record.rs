mod answer;
mod record_type;

pub use answer::Answer;
pub use record_type::RecordType;
