use thiserror::Error;

use proplogic_formula::HornFormatError;
use proplogic_parser::ParserError;

/// Possible errors while reasoning.
///
/// None of these errors affect the knowledge base or sentences involved, the same knowledge base
/// can be queried again after an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Could not parse sentence: {0}")]
    Parse(#[from] ParserError),
    #[error(transparent)]
    HornFormat(#[from] HornFormatError),
    #[error("{0}")]
    Precondition(String),
}
