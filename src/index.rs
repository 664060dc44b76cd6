use crate::entry::{RouteBucket, RouteEntry};
use crate::enums::MatchFamily;
use crate::path::prefix_key_len;
use crate::pattern::static_prefix_len;
use crate::radix::Rax;

/// The built, read-only view over a set of [`RouteEntry`] registrations:
/// the registrations themselves (cloned out of the mutable registry at
/// build time so matching never needs to touch that lock again), three
/// radix tries (one per trie-backed family), and a priority-sorted regex
/// list. Constructed by [`RouteIndex::build`] and then queried by the
/// matcher without further mutation — the "build once, serve many" split
/// spec §5 calls for. Published behind `ArcSwapOption` by [`crate::Router`]
/// so readers never block on a rebuild in progress.
#[derive(Debug, Default)]
pub struct RouteIndex {
    pub(crate) entries: Vec<RouteEntry>,
    pub(crate) exact_ix: Rax<usize>,
    pub(crate) prefix_ix: Rax<usize>,
    pub(crate) param_ix: Rax<RouteBucket>,
    pub(crate) regex_list: Vec<usize>,
}

impl RouteIndex {
    /// `registrations` must already be sorted by priority descending
    /// (stable, so ties keep insertion order) — the caller (`Router::build`)
    /// owns that sort so it happens exactly once per build.
    #[tracing::instrument(level = "debug", skip(registrations), fields(count = registrations.len()))]
    pub fn build(registrations: &[RouteEntry]) -> Self {
        let mut index = RouteIndex {
            entries: registrations.to_vec(),
            ..Default::default()
        };

        for (i, entry) in index.entries.iter().enumerate() {
            match entry.match_family {
                MatchFamily::Exact => {
                    if index.exact_ix.get(&entry.path).is_none() {
                        index.exact_ix.insert(&entry.path, i);
                    }
                }
                MatchFamily::Prefix => {
                    let key_len = prefix_key_len(&entry.path);
                    let key = &entry.path[..key_len];
                    if index.prefix_ix.get(key).is_none() {
                        index.prefix_ix.insert(key, i);
                    }
                }
                MatchFamily::Param => {
                    let prefix_len = static_prefix_len(&entry.path);
                    let prefix = &entry.path[..prefix_len];
                    index
                        .param_ix
                        .get_or_insert_with(prefix, RouteBucket::new)
                        .push(i);
                }
                MatchFamily::Regex => {
                    index.regex_list.push(i);
                }
            }
        }

        index
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
