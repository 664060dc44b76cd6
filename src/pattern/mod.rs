mod compiled;
mod error;
mod matcher;

pub use compiled::{CompiledPattern, Token, compile, static_prefix_len};
pub use error::{PatternError, PatternResult};
pub use matcher::{Captures, MAX_CAPTURED_PARAMS, MatchedParam, match_compiled};
