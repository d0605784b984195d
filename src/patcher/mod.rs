//! Idempotent injection of the client-initialization block into the
//! application's database module.
//!
//! Layout:
//! - `template.rs`: the block template and placeholder rendering
//!
//! Detection is a deliberate substring scan for [`SUPABASE_MARKER`] rather
//! than a structural parse of the target file; the marker is the import line
//! every rendered block carries, so a match anywhere in the file means the
//! block is already present.

pub mod template;

use crate::error::PatchError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Marker substring identifying an already-injected integration block.
pub const SUPABASE_MARKER: &str = "from '@supabase/supabase-js'";

/// Result of patch verification/injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Marker already present; the file was left untouched.
    AlreadyPatched,
    /// The integration block was rendered and written during this call.
    Patched,
}

impl std::fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchOutcome::AlreadyPatched => write!(f, "already patched"),
            PatchOutcome::Patched => write!(f, "patched"),
        }
    }
}

/// Injects a rendered template block at the head of a target source file,
/// exactly once. Augment-only: existing content is always preserved below
/// the block, never discarded.
pub struct FilePatcher {
    target: PathBuf,
}

impl FilePatcher {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Ensure the target file carries the integration block.
    ///
    /// A missing file is treated as empty content, provided its parent
    /// directory exists; a missing parent directory is
    /// [`PatchError::NotFound`]. When the marker is already present no write
    /// of any kind is performed.
    pub fn patch(&self, template: &str, vars: &[(&str, &str)]) -> Result<PatchOutcome, PatchError> {
        if let Some(parent) = self.target.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(PatchError::NotFound(parent.to_path_buf()));
        }

        let original = match fs::read_to_string(&self.target) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        if original.contains(SUPABASE_MARKER) {
            debug!(path = %self.target.display(), "integration block already present");
            return Ok(PatchOutcome::AlreadyPatched);
        }

        let block = template::render(template, vars)?;

        let mut content = String::with_capacity(block.len() + original.len());
        content.push_str(&block);
        content.push_str(&original);

        atomic_write(&self.target, content.as_bytes())?;
        info!(
            path = %self.target.display(),
            bytes = content.len(),
            "integration block injected"
        );
        Ok(PatchOutcome::Patched)
    }
}

/// Writes content to a file atomically using a temporary file.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), PatchError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}
