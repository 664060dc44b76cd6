use std::sync::{Arc, LazyLock};

use smallvec::SmallVec;

use super::compiled::{CompiledPattern, Token};

/// Spec §4.5: "Capacity limit: at most 16 parameters per match; excess
/// captures are silently dropped from the result (the match still
/// succeeds)." Implementations may raise this but must document it — this
/// crate keeps the spec's default and does not expose a knob to raise it.
pub const MAX_CAPTURED_PARAMS: usize = 16;

pub type Captures = SmallVec<[MatchedParam; MAX_CAPTURED_PARAMS]>;

static WILDCARD_NAME: LazyLock<Arc<str>> = LazyLock::new(|| Arc::from("*"));

/// A captured parameter. Borrowed views are represented as byte offsets
/// into the request path rather than literal slices, so this type does not
/// need a lifetime tied to the path buffer (mirrors the teacher's own
/// `(String, (usize, usize))` resolver result).
#[derive(Debug, Clone)]
pub struct MatchedParam {
    pub name: Arc<str>,
    pub start: usize,
    pub end: usize,
}

impl MatchedParam {
    #[inline]
    pub fn value<'p>(&self, path: &'p [u8]) -> &'p [u8] {
        &path[self.start..self.end]
    }
}

/// Runs the two-cursor match algorithm from spec §4.5 against a compiled
/// PARAM pattern. Success requires both cursors to reach the end of their
/// respective buffers simultaneously.
pub fn match_compiled(pattern: &CompiledPattern, path: &[u8]) -> Option<Captures> {
    let mut captures = Captures::new();
    let mut ri = 0usize;

    for token in &pattern.tokens {
        match token {
            Token::Literal(lit) => {
                let remaining = path.len() - ri;
                if remaining < lit.len() || &path[ri..ri + lit.len()] != lit.as_ref() {
                    return None;
                }
                ri += lit.len();
            }
            Token::Param(name) => {
                let start = ri;
                ri = match memchr::memchr(b'/', &path[ri..]) {
                    Some(offset) => ri + offset,
                    None => path.len(),
                };
                if captures.len() < MAX_CAPTURED_PARAMS {
                    captures.push(MatchedParam {
                        name: name.clone(),
                        start,
                        end: ri,
                    });
                }
            }
            Token::Wildcard => {
                let start = ri;
                ri = path.len();
                if captures.len() < MAX_CAPTURED_PARAMS {
                    captures.push(MatchedParam {
                        name: WILDCARD_NAME.clone(),
                        start,
                        end: ri,
                    });
                }
            }
        }
    }

    if ri == path.len() { Some(captures) } else { None }
}
