// Rust guideline compliant 2026-10-18

//! Staged file discovery.

use crate::error::{Error, Result};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};

/// Source of the paths staged for the next commit.
pub trait StagedFiles {
    /// Returns staged paths relative to the repository working directory,
    /// in the order the source reports them. Duplicates are not removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the staged list cannot be read.
    fn staged_paths(&self) -> Result<Vec<PathBuf>>;
}

/// Staged files read from a Git index (HEAD tree vs. index, names only).
pub struct GitIndex {
    repo: Repository,
}

impl GitIndex {
    /// Opens the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not inside a Git repository.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// Wraps an already opened repository.
    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Root of the working tree that staged paths are relative to.
    ///
    /// # Errors
    ///
    /// Returns an error for bare repositories.
    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or_else(|| {
            Error::Git(git2::Error::from_str(
                "bare repository has no working directory",
            ))
        })
    }

    /// Path of the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }
}

impl StagedFiles for GitIndex {
    fn staged_paths(&self) -> Result<Vec<PathBuf>> {
        // An unborn branch has no HEAD tree; everything in the index is staged.
        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };

        let index = self.repo.index()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        let paths: Vec<PathBuf> = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(Path::to_path_buf)
            })
            .collect();

        tracing::debug!(count = paths.len(), "read staged files from index");
        Ok(paths)
    }
}

impl<S: StagedFiles + ?Sized> StagedFiles for &S {
    fn staged_paths(&self) -> Result<Vec<PathBuf>> {
        (**self).staged_paths()
    }
}
