use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter starting at byte {index} in pattern '{pattern}' is missing a closing '}}'")]
    UnterminatedParameter { pattern: String, index: usize },
    #[error("parameter at byte {index} in pattern '{pattern}' has an empty name")]
    EmptyParameterName { pattern: String, index: usize },
    #[error(
        "wildcard '*' at byte {index} in pattern '{pattern}' must be the final construct in the pattern"
    )]
    WildcardMustBeTerminal { pattern: String, index: usize },
}

pub type PatternResult<T> = Result<T, PatternError>;
