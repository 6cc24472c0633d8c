use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

const MAX_SYMLINK_HOPS: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum PathValidationError {
    #[error("path {path} resolves outside project root {root}", path = path.display(), root = root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("cannot resolve path {path}: {source}", path = path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Confines file access to a project directory.
///
/// Both the root and every candidate are made absolute and symlink-resolved
/// before comparison, and containment is checked per path component, so a
/// sibling such as `/a/bx` is never mistaken for a child of `/a/b`.
#[derive(Debug, Clone)]
pub struct ProjectRootGuard {
    root: PathBuf,
}

impl ProjectRootGuard {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, PathValidationError> {
        let root = root.as_ref();
        let unresolvable = |source| PathValidationError::Unresolvable {
            path: root.to_path_buf(),
            source,
        };
        fs::metadata(root).map_err(unresolvable)?;
        let resolved = resolve(root).map_err(unresolvable)?;
        Ok(Self { root: resolved })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the resolved form of `candidate` when it is the root or lies under it.
    pub fn validate(&self, candidate: impl AsRef<Path>) -> Result<PathBuf, PathValidationError> {
        let candidate = candidate.as_ref();
        let resolved =
            resolve(candidate).map_err(|source| PathValidationError::Unresolvable {
                path: candidate.to_path_buf(),
                source,
            })?;

        if resolved.starts_with(&self.root) {
            Ok(resolved)
        } else {
            tracing::warn!(
                path = %candidate.display(),
                resolved = %resolved.display(),
                root = %self.root.display(),
                "Rejected path outside project root"
            );
            Err(PathValidationError::OutsideRoot {
                path: candidate.to_path_buf(),
                root: self.root.clone(),
            })
        }
    }
}

/// Absolute, symlink-resolved form of `path`, which need not exist yet.
/// Components are walked one at a time and every symlink met on the way is
/// followed, dangling ones included, so `..` always pops a physical directory.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    resolve_absolute(&absolute, MAX_SYMLINK_HOPS)
}

fn resolve_absolute(absolute: &Path, hops_left: usize) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();
    let mut components = absolute.components();

    while let Some(component) = components.next() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                let next = resolved.join(name);
                let is_symlink = fs::symlink_metadata(&next)
                    .map(|meta| meta.file_type().is_symlink())
                    .unwrap_or(false);
                if !is_symlink {
                    resolved = next;
                    continue;
                }
                if hops_left == 0 {
                    return Err(io::Error::other(format!(
                        "too many levels of symbolic links at {}",
                        next.display()
                    )));
                }
                // An absolute target replaces `resolved` on join.
                let target = fs::read_link(&next)?;
                let rewritten = resolved.join(target).join(components.as_path());
                return resolve_absolute(&rewritten, hops_left - 1);
            }
        }
    }

    Ok(resolved)
}
