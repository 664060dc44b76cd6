use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path contains control byte {byte} at index {index}")]
    ControlByte { index: usize, byte: u8 },
}

pub type PathResult<T> = Result<T, PathError>;
