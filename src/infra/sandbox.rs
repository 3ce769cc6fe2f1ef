//! Root-confined resolution of caller-supplied paths.
//!
//! [`resolve_user_path`] is the single gate between caller input and the
//! filesystem: every note and folder operation resolves its path argument
//! here before touching disk. Validation is purely lexical up to the final
//! canonicalization step, which follows symlinks in the existing prefix so
//! a link pointing outside the root cannot smuggle an operation out.

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Reasons a caller-supplied path is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathRejection {
    #[error("empty path is not allowed here")]
    Empty,

    #[error("path contains a null byte")]
    NullByte,

    #[error("absolute paths are not allowed")]
    Absolute,

    #[error("path traversal (`..` segment) is not allowed")]
    Traversal,

    #[error("path could not be resolved")]
    Unresolvable,

    #[error("resolved path escapes the notes root")]
    OutsideRoot,
}

/// Flags controlling how a caller-supplied path is interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveRules {
    /// Force the resolved path to carry a `.md` extension.
    pub require_md: bool,
    /// Treat `""` and `"."` as the root itself instead of refusing them.
    pub allow_empty_as_root: bool,
}

impl ResolveRules {
    /// Rules for note paths: `.md` enforced, empty refused.
    pub fn markdown() -> Self {
        Self {
            require_md: true,
            allow_empty_as_root: false,
        }
    }

    /// Rules for folder paths: extension untouched, empty refused.
    pub fn folder() -> Self {
        Self {
            require_md: false,
            allow_empty_as_root: false,
        }
    }
}

/// Validates `user_path` and resolves it against `root`.
///
/// Checks are applied in order: empty sentinel, null byte, absolute path,
/// `..` segment, extension normalization, canonicalization, containment.
/// The returned path is canonical and guaranteed to equal or descend from
/// the canonicalized root.
///
/// The target does not have to exist: resolution canonicalizes the deepest
/// existing ancestor and re-appends the remaining (already vetted)
/// segments, so save-type operations can resolve paths they are about to
/// create.
pub fn resolve_user_path(
    root: &Path,
    user_path: &str,
    rules: ResolveRules,
) -> Result<PathBuf, PathRejection> {
    if user_path.is_empty() || user_path == "." {
        if rules.allow_empty_as_root {
            return canonicalize_lenient(root).map_err(|_| PathRejection::Unresolvable);
        }
        return Err(PathRejection::Empty);
    }

    if user_path.contains('\0') {
        return Err(PathRejection::NullByte);
    }

    let candidate = Path::new(user_path);

    if candidate.is_absolute() {
        return Err(PathRejection::Absolute);
    }

    if candidate
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(PathRejection::Traversal);
    }

    let candidate = if rules.require_md && !user_path.ends_with(".md") {
        // `with_extension` swaps an existing extension, so "drafts/v1.0"
        // resolves to "drafts/v1.md", not "drafts/v1.0.md".
        candidate.with_extension("md")
    } else {
        candidate.to_path_buf()
    };

    let resolved = canonicalize_lenient(&root.join(candidate))
        .map_err(|_| PathRejection::Unresolvable)?;
    let canonical_root =
        canonicalize_lenient(root).map_err(|_| PathRejection::Unresolvable)?;

    // starts_with is true for the root itself, which covers "x/." style
    // inputs that collapse back to the root.
    if !resolved.starts_with(&canonical_root) {
        return Err(PathRejection::OutsideRoot);
    }

    Ok(resolved)
}

/// Canonicalizes a path that may not exist yet.
///
/// The deepest existing ancestor is canonicalized (following symlinks) and
/// the not-yet-existing tail is appended verbatim. The tail is safe to
/// append untouched only because `..` segments were rejected before the
/// join.
fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    match dunce::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            // A name that exists but will not canonicalize is a dangling
            // symlink, not a not-yet-created target; writing through it
            // could land outside the root, so refuse to guess at it.
            if path.symlink_metadata().is_ok() {
                return Err(err);
            }
            let parent = path
                .parent()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no parent"))?;
            let name = path.file_name().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")
            })?;
            Ok(canonicalize_lenient(parent)?.join(name))
        }
        Err(err) => Err(err),
    }
}
