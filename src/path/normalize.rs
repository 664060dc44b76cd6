use super::PathError;

/// Validates a raw path pattern as registered by the caller.
///
/// Paths are opaque bytes (spec: "Path is opaque bytes for EXACT"); the only
/// universal requirements are non-emptiness and the absence of control
/// bytes, which would make later byte-exact comparisons behave in ways no
/// caller could have intended.
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len()))]
pub fn validate_path(path: &[u8]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    for (index, &byte) in path.iter().enumerate() {
        if byte < 0x20 {
            return Err(PathError::ControlByte { index, byte });
        }
    }

    Ok(())
}

/// Computes the normalized key length for a PREFIX pattern per spec §4.3:
/// a trailing `*` is stripped, then a trailing `/` is stripped.
#[inline]
pub fn prefix_key_len(path: &[u8]) -> usize {
    let mut len = path.len();

    if len > 0 && path[len - 1] == b'*' {
        len -= 1;
    }
    if len > 0 && path[len - 1] == b'/' {
        len -= 1;
    }

    len
}
