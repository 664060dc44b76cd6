use std::sync::Arc;

use regex::bytes::Regex;

use crate::enums::{MatchFamily, Methods};
use crate::pattern::CompiledPattern;

/// One registered route. Immutable once constructed; the router is the sole
/// owner and holds every entry in `registrations`. Indices (`exact_ix`,
/// `prefix_ix`, `param_ix`, `regex_list`) hold non-owning `usize` offsets
/// into that vector rather than copies or references, so there is exactly
/// one place that frees the underlying storage — the analogue, in safe
/// Rust, of the arena+index scheme the router's design notes call for.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: Box<[u8]>,
    pub host: Option<Box<[u8]>>,
    pub methods: Methods,
    pub match_family: MatchFamily,
    pub priority: i32,
    pub handler: u64,
    /// Present iff `match_family == Param`. Compiled eagerly at `add` time;
    /// a pattern that fails to parse compiles to `None` rather than
    /// rejecting the registration — registration performs no pattern
    /// validation, so a malformed pattern is accepted but can never match.
    pub pattern: Option<CompiledPattern>,
    /// Present iff `match_family == Regex`. Same no-validation-at-register
    /// treatment as `pattern`: an unparseable regex source compiles to
    /// `None` and the entry is skipped at the regex matching stage.
    pub regex: Option<Arc<Regex>>,
}

impl RouteEntry {
    pub fn new(
        path: Box<[u8]>,
        host: Option<Box<[u8]>>,
        methods: Methods,
        match_family: MatchFamily,
        priority: i32,
        handler: u64,
    ) -> Self {
        let pattern = match match_family {
            MatchFamily::Param => crate::pattern::compile(&path).ok(),
            _ => None,
        };
        let regex = match match_family {
            MatchFamily::Regex => {
                let source = String::from_utf8_lossy(&path);
                Regex::new(&source).ok().map(Arc::new)
            }
            _ => None,
        };

        Self {
            path,
            host,
            methods,
            match_family,
            priority,
            handler,
            pattern,
            regex,
        }
    }

    #[inline]
    pub fn accepts(&self, host: Option<&[u8]>, method: Methods) -> bool {
        if !self.methods.intersects(method) {
            return false;
        }
        match &self.host {
            Some(registered) => host == Some(registered.as_ref()),
            None => true,
        }
    }
}

/// An ordered, growable sequence of entry offsets sharing one index key.
/// Growth is geometric starting from capacity 4, matching the reference
/// bucket's amortized-O(1) push.
#[derive(Debug, Default)]
pub struct RouteBucket {
    entries: Vec<usize>,
}

impl RouteBucket {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(4),
        }
    }

    pub fn push(&mut self, entry_index: usize) {
        self.entries.push(entry_index);
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
