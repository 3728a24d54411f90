//! Version-control sink: commit the notebook change, push if a remote is
//! configured. Everything shells out to the `git` binary; a missing or
//! misconfigured git surfaces as an error the caller downgrades to a warning.

use crate::error::{Result, WordbookError};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::process::{Command, Output};

/// What the sink managed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushReport {
    Committed,
    CommittedAndPushed,
}

pub trait VcsSink {
    fn commit_and_push(&self, message: &str) -> Result<PushReport>;
}

pub fn format_commit_message(word: &str) -> String {
    format_commit_message_at(word, Local::now())
}

pub fn format_commit_message_at(word: &str, when: DateTime<Local>) -> String {
    format!("Add word: {} - {}", word, when.format("%Y-%m-%d %H:%M:%S"))
}

pub fn format_save_message_at(when: DateTime<Local>) -> String {
    format!("Save entry - {}", when.format("%Y-%m-%d %H:%M:%S"))
}

/// Commits in the directory holding the notebook file, initializing a
/// repository there on first use.
pub struct GitSink {
    repo_dir: PathBuf,
    remote_url: Option<String>,
}

impl GitSink {
    pub fn new(repo_dir: PathBuf, remote_url: Option<String>) -> Self {
        Self {
            repo_dir,
            remote_url,
        }
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| WordbookError::Git(format!("failed to run git: {}", e)))
    }

    fn git_ok(&self, args: &[&str], what: &str) -> Result<()> {
        let output = self.git(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WordbookError::Git(format!(
                "{}: {}",
                what,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn is_repo(&self) -> Result<bool> {
        Ok(self.git(&["rev-parse", "--git-dir"])?.status.success())
    }

    fn has_remote(&self, name: &str) -> Result<bool> {
        Ok(self.git(&["remote", "get-url", name])?.status.success())
    }
}

impl VcsSink for GitSink {
    fn commit_and_push(&self, message: &str) -> Result<PushReport> {
        if !self.is_repo()? {
            self.git_ok(&["init"], "could not initialize repository")?;
        }
        self.git_ok(&["add", "-A"], "could not stage changes")?;
        self.git_ok(&["commit", "-m", message], "could not commit")?;

        let Some(url) = &self.remote_url else {
            return Ok(PushReport::Committed);
        };
        if self.has_remote("origin")? {
            self.git_ok(
                &["remote", "set-url", "origin", url],
                "could not update remote",
            )?;
        } else {
            self.git_ok(&["remote", "add", "origin", url], "could not add remote")?;
        }
        self.git_ok(&["push", "origin", "HEAD"], "could not push")?;
        Ok(PushReport::CommittedAndPushed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn commit_message_format() {
        let when = Local.with_ymd_and_hms(2026, 8, 6, 14, 30, 5).unwrap();
        assert_eq!(
            format_commit_message_at("serendipity", when),
            "Add word: serendipity - 2026-08-06 14:30:05"
        );
    }

    #[test]
    fn save_message_format() {
        let when = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_save_message_at(when), "Save entry - 2026-01-02 03:04:05");
    }
}
