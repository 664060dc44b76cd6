use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::entry::RouteEntry;
use crate::enums::{MatchFamily, Methods};
use crate::errors::{RouterError, RouterResult};
use crate::index::RouteIndex;
use crate::matcher::{self, MatchOutcome};

/// Router-wide tuning. The source this crate is modeled on exposes no
/// knobs beyond the fixed wire contract (method bit layout, the 16-param
/// capture cap); this struct exists as a stable extension point for
/// embedders rather than to carry fields today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RouterOptions {}

/// The top-level HTTP request router: aggregates the registration list and
/// the built index.
///
/// Mutation (`add`, `build`, `clear`) takes `&self` and serializes through
/// an internal lock, matching the "single-threaded per instance during
/// mutation" model — concurrent mutators queue rather than race. Once
/// `build` has published a snapshot, `find` reads it through an
/// `ArcSwapOption` without taking that lock at all: the published
/// `RouteIndex` owns its own copy of the entries it indexes, so it stays
/// valid and self-consistent even while a concurrent `add` is rewriting
/// `registrations` underneath it. A match racing a `build` in progress
/// sees either the old snapshot or the new one, never a torn mix.
pub struct Router {
    registrations: RwLock<Vec<RouteEntry>>,
    index: ArcSwapOption<RouteIndex>,
    #[allow(dead_code)]
    options: RouterOptions,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouterOptions::default())
    }
}

impl Router {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            registrations: RwLock::new(Vec::new()),
            index: ArcSwapOption::from(None),
            options,
        }
    }

    /// Registers one pattern. Deferred: no indexing happens here, only
    /// appended to `registrations` and marked for the next `build`.
    /// Duplicate `(host, path, family)` triples are accepted without
    /// deduplication — the resulting tie is resolved at build time by
    /// priority, then by insertion order.
    #[tracing::instrument(level = "debug", skip(self, host, path), fields(path_len = path.len()))]
    pub fn add(
        &self,
        host: Option<&[u8]>,
        path: &[u8],
        methods: Methods,
        family: MatchFamily,
        priority: i32,
        handler: u64,
    ) -> RouterResult<()> {
        if path.is_empty() {
            return Err(RouterError::EmptyPath);
        }
        if methods.is_empty() {
            return Err(RouterError::ZeroMethods);
        }

        let entry = RouteEntry::new(
            path.into(),
            host.map(Into::into),
            methods,
            family,
            priority,
            handler,
        );
        self.registrations.write().push(entry);
        Ok(())
    }

    /// Idempotent: sorts `registrations` by priority descending (stable,
    /// so ties keep insertion order), rebuilds the three tries and the
    /// regex list from scratch, and publishes the result. Safe to call
    /// repeatedly, including with no intervening `add` — `build; build`
    /// always yields the same published index.
    #[tracing::instrument(level = "info", skip(self))]
    pub fn build(&self) {
        let mut regs = self.registrations.write();
        regs.sort_by(|a, b| b.priority.cmp(&a.priority));
        let index = RouteIndex::build(&regs);
        self.index.store(Some(Arc::new(index)));
    }

    /// Drops every registration and the published index. The next `find`
    /// sees an empty router (no match) until `add`/`build` runs again.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn clear(&self) {
        self.registrations.write().clear();
        self.index.store(None);
    }

    /// Number of registrations, irrespective of build state.
    pub fn count(&self) -> usize {
        self.registrations.read().len()
    }

    /// Looks up the best-matching registered route. Returns `None` both on
    /// a genuine miss and when no `build` has run yet (or the router was
    /// `clear`ed since) — both are indistinguishable "no match" outcomes to
    /// a caller.
    #[tracing::instrument(level = "trace", skip(self, host, path), fields(path_len = path.len()))]
    pub fn find(&self, host: Option<&[u8]>, path: &[u8], method: Methods) -> Option<MatchOutcome> {
        let guard = self.index.load();
        let index = guard.as_deref()?;
        matcher::find(index, host, path, method)
    }
}
