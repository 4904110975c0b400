use crate::error::{Result, SyncError};
use serde::Serialize;
use std::path::PathBuf;

/// Home-relative directory where Claude Code discovers user skills.
pub const CLAUDE_SKILLS_SUFFIX: &str = ".claude/skills";

/// Home-relative directory shared by other agent tooling.
pub const AGENTS_SKILLS_SUFFIX: &str = ".agents/skills";

/// One destination directory for the content tree.
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    /// Short home-relative form, e.g. `~/.claude/skills`. Used in output.
    pub label: String,
    /// Absolute directory the content is mirrored into.
    pub root: PathBuf,
}

impl Target {
    fn new(home: &std::path::Path, suffix: &str) -> Self {
        Self {
            label: format!("~/{suffix}"),
            root: home.join(suffix),
        }
    }
}

/// The fixed set of destinations, resolved against the user's home directory.
pub fn default_targets() -> Result<Vec<Target>> {
    let home = home::home_dir().ok_or(SyncError::HomeNotFound)?;
    Ok(vec![
        Target::new(&home, CLAUDE_SKILLS_SUFFIX),
        Target::new(&home, AGENTS_SKILLS_SUFFIX),
    ])
}
