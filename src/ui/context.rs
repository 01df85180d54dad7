//! UI context for detecting interactive vs CI environments

use std::io::IsTerminal;

/// Environment variables set by common CI providers
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

/// UI context that determines output behavior
#[derive(Debug, Clone)]
pub struct UiContext {
    fancy: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        let is_ci = CI_VARS.iter().any(|var| std::env::var_os(var).is_some());
        Self {
            fancy: std::io::stdout().is_terminal() && !is_ci,
        }
    }

    /// Plain line-oriented output (for testing, pipes and CI)
    pub fn plain() -> Self {
        Self { fancy: false }
    }

    /// Check if we should use fancy output (cliclack log markers)
    pub fn use_fancy_output(&self) -> bool {
        self.fancy
    }
}
