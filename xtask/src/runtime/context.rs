//! Shared command context passed into command families.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::path::{Path, PathBuf};

/// Execution context for xtask commands.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
}

impl CommandContext {
    /// Create a context rooted at the current workspace.
    pub fn new() -> XtaskResult<Self> {
        Ok(Self::at(workspace_root()?))
    }

    /// Create a context rooted at an explicit directory.
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn workspace_root() -> XtaskResult<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::environment("xtask lives under workspace root"))
}
