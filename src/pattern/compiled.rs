use std::sync::Arc;

use super::{PatternError, PatternResult};

/// One element of a compiled PARAM pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(Box<[u8]>),
    /// `{name}`: captures one path segment (up to the next `/` or end).
    Param(Arc<str>),
    /// Terminal `*`: captures all remaining bytes, including `/`.
    Wildcard,
}

/// A PARAM pattern parsed once at registration time and matched many times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledPattern {
    pub tokens: Vec<Token>,
}

/// Parses pattern grammar (spec §4.5): literal bytes, `{name}` single-segment
/// captures, and a terminal `*` capturing the remainder.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern_len = pattern.len()))]
pub fn compile(pattern: &[u8]) -> PatternResult<CompiledPattern> {
    let lossy = || String::from_utf8_lossy(pattern).into_owned();

    let mut tokens = Vec::new();
    let mut literal_start = 0usize;
    let mut i = 0usize;
    let len = pattern.len();

    while i < len {
        match pattern[i] {
            b'{' => {
                if i > literal_start {
                    tokens.push(Token::Literal(pattern[literal_start..i].into()));
                }

                let name_start = i + 1;
                let j = match memchr::memchr(b'}', &pattern[name_start..]) {
                    Some(offset) => name_start + offset,
                    None => len,
                };
                if j >= len {
                    return Err(PatternError::UnterminatedParameter {
                        pattern: lossy(),
                        index: i,
                    });
                }
                if j == name_start {
                    return Err(PatternError::EmptyParameterName {
                        pattern: lossy(),
                        index: i,
                    });
                }

                let name = String::from_utf8_lossy(&pattern[name_start..j]).into_owned();
                tokens.push(Token::Param(Arc::from(name)));
                i = j + 1;
                literal_start = i;
            }
            b'*' => {
                if i != len - 1 {
                    return Err(PatternError::WildcardMustBeTerminal {
                        pattern: lossy(),
                        index: i,
                    });
                }
                if i > literal_start {
                    tokens.push(Token::Literal(pattern[literal_start..i].into()));
                }
                tokens.push(Token::Wildcard);
                i += 1;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    if literal_start < len {
        tokens.push(Token::Literal(pattern[literal_start..].into()));
    }

    Ok(CompiledPattern { tokens })
}

/// Static prefix of a parametric pattern (spec §4.3 / glossary): the longest
/// initial run of literal bytes, ending at a `/` boundary, before the first
/// capture metacharacter.
pub fn static_prefix_len(pattern: &[u8]) -> usize {
    for (i, &b) in pattern.iter().enumerate() {
        if b == b'{' || b == b'*' {
            let mut cut = i;
            while cut > 0 && pattern[cut - 1] != b'/' {
                cut -= 1;
            }
            return cut;
        }
    }
    pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_mixed_literal_and_params() {
        let c = compile(b"/user/{id}/profile").unwrap();
        assert_eq!(
            c.tokens,
            vec![
                Token::Literal(b"/user/".as_slice().into()),
                Token::Param(Arc::from("id")),
                Token::Literal(b"/profile".as_slice().into()),
            ]
        );
    }

    #[test]
    fn compiles_terminal_wildcard() {
        let c = compile(b"/file/*").unwrap();
        assert_eq!(
            c.tokens,
            vec![Token::Literal(b"/file/".as_slice().into()), Token::Wildcard]
        );
    }

    #[test]
    fn rejects_non_terminal_wildcard() {
        assert!(compile(b"/file/*/extra").is_err());
    }

    #[test]
    fn rejects_unterminated_and_empty_param() {
        assert!(compile(b"/user/{id").is_err());
        assert!(compile(b"/user/{}").is_err());
    }

    #[test]
    fn static_prefix_stops_at_segment_boundary_before_capture() {
        assert_eq!(static_prefix_len(b"/user/{id}/profile"), 6);
        assert_eq!(static_prefix_len(b"/file/*"), 6);
        assert_eq!(static_prefix_len(b"{id}"), 0);
        assert_eq!(static_prefix_len(b"/static/only"), 12);
    }
}
