use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tracing::debug;

/// Outcome of [`File::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file was created or its content replaced.
    Written,
    /// The file already held this exact content and was left alone.
    Unchanged,
}

/// Generated text bound to its destination.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the content, creating missing parent directories.
    ///
    /// A file whose bytes already match is not rewritten, so its
    /// modification time survives repeated runs.
    pub fn write(&self) -> Result<WriteResult> {
        if self.is_current() {
            debug!(path = %self.path.display(), "content unchanged, skipping write");
            return Ok(WriteResult::Unchanged);
        }

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;

        debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }

    fn is_current(&self) -> bool {
        fs::read(&self.path).is_ok_and(|existing| existing == self.content.as_bytes())
    }
}

/// Path of `file` relative to `base` when it lives below it.
pub fn relative_to<'a>(file: &'a Path, base: &Path) -> Option<&'a Path> {
    file.strip_prefix(base).ok()
}
