//! Build metadata shown by `aws-ssm --version`.
//!
//! Values are fixed at compile time. Packaging scripts override them by
//! exporting `AWS_SSM_VERSION`, `AWS_SSM_GIT_COMMIT`, `AWS_SSM_BUILD_TIME`
//! and `AWS_SSM_MAINTAINER` before `cargo build`.

const UNKNOWN: &str = "unknown";

/// Build metadata bound at packaging time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
    pub maintainer: &'static str,
}

/// Metadata of the running binary
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: match option_env!("AWS_SSM_VERSION") {
        Some(v) => v,
        None => env!("CARGO_PKG_VERSION"),
    },
    git_commit: match option_env!("AWS_SSM_GIT_COMMIT") {
        Some(v) => v,
        None => UNKNOWN,
    },
    build_time: match option_env!("AWS_SSM_BUILD_TIME") {
        Some(v) => v,
        None => UNKNOWN,
    },
    maintainer: match option_env!("AWS_SSM_MAINTAINER") {
        Some(v) => v,
        None => env!("CARGO_PKG_AUTHORS"),
    },
};

impl BuildInfo {
    /// Lines printed for `--version`. Unknown commit and build time are omitted.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("aws-ssm version {}", self.version)];

        if self.git_commit != UNKNOWN {
            lines.push(format!("Git commit: {}", self.git_commit));
        }
        if self.build_time != UNKNOWN {
            lines.push(format!("Built: {}", self.build_time));
        }
        if !self.maintainer.is_empty() {
            // Underscores stand in for spaces
            lines.push(format!("Maintainer: {}", self.maintainer.replace('_', " ")));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(git_commit: &'static str, build_time: &'static str, maintainer: &'static str) -> BuildInfo {
        BuildInfo {
            version: "1.2.3",
            git_commit,
            build_time,
            maintainer,
        }
    }

    #[test]
    fn test_minimal_version_lines() {
        let lines = info(UNKNOWN, UNKNOWN, "").lines();
        assert_eq!(lines, vec!["aws-ssm version 1.2.3".to_string()]);
    }

    #[test]
    fn test_full_version_lines() {
        let lines = info("abc1234", "2026-01-01T00:00:00Z", "Jane_Q_Doe").lines();
        assert_eq!(
            lines,
            vec![
                "aws-ssm version 1.2.3".to_string(),
                "Git commit: abc1234".to_string(),
                "Built: 2026-01-01T00:00:00Z".to_string(),
                "Maintainer: Jane Q Doe".to_string(),
            ]
        );
    }

    #[test]
    fn test_default_build_info_has_version() {
        assert!(!BUILD_INFO.version.is_empty());
        assert!(BUILD_INFO.lines()[0].starts_with("aws-ssm version "));
    }
}
