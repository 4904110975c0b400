use crate::target::Target;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A non-fatal failure recorded against one target. The run keeps going;
/// these are reported at the end instead of aborting the other targets.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncFailure {
    #[error("cannot create {}: {}", .path.display(), .reason)]
    PathCreation { path: PathBuf, reason: String },

    #[error("cannot copy {} to {}: {}", .from.display(), .to.display(), .reason)]
    Copy {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
}

impl SyncFailure {
    pub fn path_creation(path: PathBuf, reason: impl fmt::Display) -> Self {
        Self::PathCreation {
            path,
            reason: reason.to_string(),
        }
    }

    pub fn copy(from: PathBuf, to: PathBuf, reason: impl fmt::Display) -> Self {
        Self::Copy {
            from,
            to,
            reason: reason.to_string(),
        }
    }
}

/// A file that landed at a target.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    /// Root-relative path, identical on the source and target side.
    pub rel: PathBuf,
    /// True when an existing file was overwritten rather than created.
    pub replaced: bool,
}

/// Outcome of synchronizing one target.
#[derive(Debug, Serialize)]
pub struct TargetReport {
    pub label: String,
    pub root: PathBuf,
    pub written: Vec<WrittenFile>,
    pub failures: Vec<SyncFailure>,
}

impl TargetReport {
    pub fn new(target: &Target) -> Self {
        Self {
            label: target.label.clone(),
            root: target.root.clone(),
            written: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files copied, counting creations and overwrites alike.
    pub fn copied(&self) -> usize {
        self.written.len()
    }

    pub fn created(&self) -> usize {
        self.written.iter().filter(|w| !w.replaced).count()
    }

    pub fn updated(&self) -> usize {
        self.written.iter().filter(|w| w.replaced).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_name_the_paths() {
        let failure = SyncFailure::path_creation(PathBuf::from("/tmp/x"), "denied");
        assert_eq!(failure.to_string(), "cannot create /tmp/x: denied");

        let failure = SyncFailure::copy(PathBuf::from("/a"), PathBuf::from("/b"), "disk full");
        assert_eq!(failure.to_string(), "cannot copy /a to /b: disk full");
    }

    #[test]
    fn failures_serialize_with_kind_tag() {
        let failure = SyncFailure::copy(PathBuf::from("/a"), PathBuf::from("/b"), "oops");
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["kind"], "copy");
        assert_eq!(value["from"], "/a");
        assert_eq!(value["reason"], "oops");
    }

    #[test]
    fn report_counts_creations_and_updates() {
        let target = Target {
            label: "~/.claude/skills".into(),
            root: PathBuf::from("/home/u/.claude/skills"),
        };
        let mut report = TargetReport::new(&target);
        report.written.push(WrittenFile {
            rel: PathBuf::from("a.md"),
            replaced: false,
        });
        report.written.push(WrittenFile {
            rel: PathBuf::from("b.md"),
            replaced: true,
        });

        assert!(report.is_ok());
        assert_eq!(report.copied(), 2);
        assert_eq!(report.created(), 1);
        assert_eq!(report.updated(), 1);
    }
}
