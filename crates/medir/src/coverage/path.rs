//! Canonical path resolution for event file references.
//!
//! File references embedded at instrumentation time may use a different
//! filesystem root than the paths keying the live registry (a different
//! working directory, a relocated source tree). Only the base name survives
//! that boundary; the directory structure comes from the caller's prefix.

use std::path::Path;

/// Resolve an event's embedded `file_ref` against `path_prefix` into the
/// canonical form used as a registry key.
///
/// Takes the base name of `file_ref`, joins it onto `path_prefix`, and
/// lexically normalizes the result (`.` and `..` folded, `/` separators).
/// Purely textual: nothing is required to exist on disk, and symlinks are
/// not chased. The caller supplies an absolute prefix; the canonical key
/// used at initialization must have been produced the same way.
#[must_use]
pub(crate) fn resolve_canonical(path_prefix: &Path, file_ref: &str) -> String {
    let base = basename(file_ref);
    let joined = format!("{}/{}", path_prefix.display(), base);
    normalize(&joined)
}

/// Final path component, treating both separator conventions as separators.
fn basename(file_ref: &str) -> &str {
    file_ref
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_ref)
}

/// Lexical normalization to a `/`-separated form with `.`/`..` folded.
fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for component in unified.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                // At the root, ".." stays at the root.
                if parts.pop().is_none() && !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }
    if absolute {
        format!("/{}", parts.join("/"))
    } else {
        parts.join("/")
    }
}
