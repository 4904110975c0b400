use crate::output;
use serde::Serialize;
use skillsync_core::{default_targets, Target};

#[derive(Serialize)]
struct TargetStatus<'a> {
    #[serde(flatten)]
    target: &'a Target,
    exists: bool,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let targets = default_targets()?;
    let statuses: Vec<_> = targets
        .iter()
        .map(|target| TargetStatus {
            target,
            exists: target.root.is_dir(),
        })
        .collect();

    if json {
        return output::print_json(&statuses);
    }

    println!("Install targets:");
    for status in &statuses {
        let state = if status.exists { "exists" } else { "missing" };
        println!("  {}  ({state})", status.target.label);
    }

    Ok(())
}
