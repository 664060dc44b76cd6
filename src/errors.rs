use thiserror::Error;

/// Top-level error taxonomy for [`crate::Router`]. Maps onto the three
/// status codes the router's C-style interface defines (`INVALID`, `ERR`;
/// `NOMEM` has no counterpart — see the module docs on [`crate::Router`]
/// for why).
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route path must not be empty")]
    EmptyPath,
    #[error("route methods bitmask must not be zero")]
    ZeroMethods,
}

pub type RouterResult<T> = Result<T, RouterError>;
