//! Git status provider using the git CLI

use super::{VcsStatus, VcsStatusProvider};
use crate::error::{SizeError, SizeResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Reads branch state by running `git` in a repository directory
#[derive(Debug, Clone, Default)]
pub struct GitStatus {
    repo_dir: Option<PathBuf>,
}

impl GitStatus {
    /// Use the current directory's repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the repository containing `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(dir.into()),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run git and return trimmed stdout, failing on a non-zero exit
    async fn exec(&self, args: &[&str]) -> SizeResult<String> {
        debug!("Executing: git {:?}", args);
        let rendered = format!("git {}", args.join(" "));

        let output = self
            .command(args)
            .output()
            .await
            .map_err(|e| SizeError::command_failed(&rendered, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SizeError::command_exec(rendered, stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Whether the working tree (tracked files) differs from HEAD
    async fn has_changes(&self) -> SizeResult<bool> {
        let args = ["diff", "--quiet", "HEAD", "--"];
        let status = self
            .command(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| SizeError::command_failed("git diff --quiet HEAD", e))?;

        match status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(SizeError::command_exec(
                "git diff --quiet HEAD",
                format!("unexpected exit status {}", status),
            )),
        }
    }

    /// Repository directory, if one was given
    pub fn repo_dir(&self) -> Option<&Path> {
        self.repo_dir.as_deref()
    }
}

/// Pick the single branch at HEAD from `for-each-ref` output
fn tip_branch(refs: &str) -> SizeResult<String> {
    let branches: Vec<&str> = refs
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match branches.as_slice() {
        [] => Err(SizeError::BranchNotFound),
        [branch] => Ok(branch.to_string()),
        many => Err(SizeError::AmbiguousBranch(many.join(", "))),
    }
}

#[async_trait]
impl VcsStatusProvider for GitStatus {
    async fn status(&self) -> SizeResult<VcsStatus> {
        let head = self.exec(&["rev-parse", "HEAD"]).await?;
        let refs = self
            .exec(&[
                "for-each-ref",
                "--points-at",
                "HEAD",
                "--format=%(refname:short)",
                "refs/heads/",
            ])
            .await?;
        let branch = tip_branch(&refs)?;
        let changed = self.has_changes().await?;

        debug!(branch = %branch, head = %head, changed, "Resolved branch tip");
        Ok(VcsStatus {
            branch,
            head,
            changed,
        })
    }
}
