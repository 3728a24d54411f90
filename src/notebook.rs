use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed header written to a freshly created notebook.
pub const NOTEBOOK_HEADER: &str = "# My English Word Book\n\n\
This is my personal collection of English words with explanations.\n\n\
---\n\n";

/// Separator between notebook entries.
pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// The durable markdown notebook. A single UTF-8 file: the fixed header at
/// the top, then entries in most-recent-first order, separated by a
/// horizontal rule.
pub struct Notebook {
    path: PathBuf,
}

impl Notebook {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the notebook with its header if it does not exist. Idempotent;
    /// existing content is never inspected or rewritten.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, NOTEBOOK_HEADER)?;
        Ok(())
    }

    /// Insert a new entry at the top of the entry list. The header stays at
    /// the top of the file; entries created earlier keep their order below.
    pub fn prepend(&self, entry: &str) -> Result<()> {
        self.ensure_exists()?;
        let existing = fs::read_to_string(&self.path)?;
        let updated = match existing.strip_prefix(NOTEBOOK_HEADER) {
            Some(rest) => format!("{}{}{}{}", NOTEBOOK_HEADER, entry, ENTRY_SEPARATOR, rest),
            // Externally created file without our header: entry goes on top.
            None => format!("{}{}{}", entry, ENTRY_SEPARATOR, existing),
        };
        self.write_atomic(&updated)
    }

    // Write to a sibling temp file and rename over the target, so a crash
    // mid-write never leaves a half-written notebook.
    fn write_atomic(&self, content: &str) -> Result<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
