pub mod errors;
pub mod rules;

pub use errors::{RecordKind, ValidationError, ValidationReport};
pub use rules::Validator;
