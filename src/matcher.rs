use crate::enums::{MatchFamily, Methods};
use crate::index::RouteIndex;
use crate::pattern::{Captures, match_compiled};

/// The outcome of a successful [`find`]. Mirrors the C ABI's `Result`
/// layout (`handler`, `params`, `param_count`, `match_family`) with
/// `param_count` folded into `params.len()`.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub handler: u64,
    pub match_family: MatchFamily,
    pub params: Captures,
}

/// The four-stage matching algorithm (spec §4.4): exact, then longest
/// passing prefix, then parametric buckets under the longest passing
/// static-prefix key, then regex in priority order. The first stage to
/// produce an entry that passes method and host filtering wins; `None`
/// means no stage produced a passing entry.
#[tracing::instrument(level = "trace", skip_all, fields(path_len = path.len()))]
pub fn find(
    index: &RouteIndex,
    host: Option<&[u8]>,
    path: &[u8],
    method: Methods,
) -> Option<MatchOutcome> {
    if let Some(&i) = index.exact_ix.get(path) {
        let entry = &index.entries[i];
        if entry.accepts(host, method) {
            return Some(MatchOutcome {
                handler: entry.handler,
                match_family: MatchFamily::Exact,
                params: Captures::new(),
            });
        }
    }

    // Longest prefix first; keep stepping to shorter candidates because
    // priority ordering is not aligned with prefix length — a higher
    // priority, shorter prefix was already tried on its own length via the
    // exact stage or an earlier iteration of this loop, so failing a
    // filter here must fall through rather than give up.
    for (key_len, &i) in index.prefix_ix.prefix_matches(path) {
        let at_boundary = path.len() == key_len || path.get(key_len) == Some(&b'/');
        if !at_boundary {
            continue;
        }
        let entry = &index.entries[i];
        if entry.accepts(host, method) {
            return Some(MatchOutcome {
                handler: entry.handler,
                match_family: MatchFamily::Prefix,
                params: Captures::new(),
            });
        }
    }

    for (_, bucket) in index.param_ix.prefix_matches(path) {
        for i in bucket.iter() {
            let entry = &index.entries[i];
            let Some(pattern) = entry.pattern.as_ref() else {
                continue;
            };
            let Some(caps) = match_compiled(pattern, path) else {
                continue;
            };
            if entry.accepts(host, method) {
                return Some(MatchOutcome {
                    handler: entry.handler,
                    match_family: MatchFamily::Param,
                    params: caps,
                });
            }
        }
    }

    for &i in &index.regex_list {
        let entry = &index.entries[i];
        let Some(re) = entry.regex.as_ref() else {
            continue;
        };
        let full_match = re
            .find(path)
            .is_some_and(|m| m.start() == 0 && m.end() == path.len());
        if full_match && entry.accepts(host, method) {
            return Some(MatchOutcome {
                handler: entry.handler,
                match_family: MatchFamily::Regex,
                params: Captures::new(),
            });
        }
    }

    None
}
