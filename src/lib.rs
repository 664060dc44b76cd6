//! An in-process HTTP request router over a radix trie.
//!
//! Patterns are registered once via [`Router::add`], an immutable index is
//! built via [`Router::build`], and [`Router::find`] is then served
//! concurrently with low constant-factor cost for exact and prefix
//! patterns and a small bounded fanout for parametric ones. Four pattern
//! families are supported — exact, prefix, `{param}`/`*` captures, and
//! (via the `regex` crate) regular expressions — coalesced into a single
//! dispatch structure with a priority discipline breaking ties across
//! families.
//!
//! HTTP parsing, network I/O, and handler dispatch beyond an opaque
//! integer id are out of scope; this crate is the matching core only.

mod entry;
mod enums;
mod errors;
mod index;
mod matcher;
mod path;
mod pattern;
mod radix;
mod router;

pub use entry::RouteEntry;
pub use enums::{MatchFamily, Methods};
pub use errors::{RouterError, RouterResult};
pub use matcher::MatchOutcome;
pub use path::{PathError, PathResult};
pub use pattern::{
    Captures, CompiledPattern, MAX_CAPTURED_PARAMS, MatchedParam, PatternError, PatternResult,
};
pub use router::{Router, RouterOptions};
