use crate::error::RunnerError;
use crate::host::TestItem;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Resolves command-line patterns to the files handed to the runner.
pub struct FileFinder {
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, RunnerError> {
        Ok(Self {
            include_globs: Self::build_globset(include)?,
            exclude_globs: Self::build_globset(exclude)?,
        })
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, RunnerError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| RunnerError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| RunnerError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Checks if a file path should be skipped based on include/exclude patterns.
    pub fn should_ignore(&self, path: &Path) -> bool {
        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
        {
            return true;
        }

        self.include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(path))
    }

    /// Expands `patterns` into a sorted, deduplicated list of absolute paths.
    ///
    /// A pattern naming an existing file is taken as is; anything else is a
    /// glob matched against files under `base_dir`. Both kinds are
    /// canonicalized, so a file reached twice is listed once. Include and
    /// exclude globs see paths relative to `base_dir` where possible.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, RunnerError> {
        let base_dir = base_dir.canonicalize().map_err(|e| {
            RunnerError::config(format!(
                "Failed to resolve base directory '{}': {}",
                base_dir.display(),
                e
            ))
        })?;
        let mut files = Vec::new();

        let mut glob_builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let path = Path::new(pattern);
            if path
                .symlink_metadata()
                .is_ok_and(|m| m.file_type().is_file())
            {
                if let Ok(abs_path) = path.canonicalize() {
                    let relative = abs_path.strip_prefix(&base_dir).unwrap_or(&abs_path);
                    if !self.should_ignore(relative) {
                        files.push(abs_path);
                    }
                }
            } else {
                let glob = Glob::new(pattern).map_err(|e| {
                    RunnerError::config(format!("Invalid pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
                has_globs = true;
            }
        }

        if has_globs {
            let glob_set = glob_builder
                .build()
                .map_err(|e| RunnerError::config(format!("Failed to build globset: {}", e)))?;

            for entry in WalkDir::new(&base_dir).into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                let relative = path.strip_prefix(&base_dir).unwrap_or(path);
                if entry.file_type().is_file()
                    && glob_set.is_match(relative)
                    && !self.should_ignore(relative)
                {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }

    /// Same as [`discover_files`](Self::discover_files), as runner items.
    pub fn discover_items(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<TestItem>, RunnerError> {
        Ok(self
            .discover_files(patterns, base_dir)?
            .into_iter()
            .map(TestItem::from)
            .collect())
    }
}
