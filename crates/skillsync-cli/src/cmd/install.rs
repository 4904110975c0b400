use crate::output;
use crate::source::resolve_source;
use anyhow::Context;
use serde::Serialize;
use skillsync_core::{default_targets, sync, ContentRoot, TargetReport};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct InstallReport<'a> {
    source: PathBuf,
    targets: &'a [TargetReport],
}

pub fn run(source: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let source_path = resolve_source(source);
    tracing::debug!("content root: {}", source_path.display());

    let content = ContentRoot::open(&source_path)
        .with_context(|| format!("cannot open content root {}", source_path.display()))?;
    let targets = default_targets()?;
    let reports = sync(&content, &targets);

    if json {
        output::print_json(&InstallReport {
            source: content.root().to_path_buf(),
            targets: &reports,
        })?;
    } else {
        print_reports(&content, &reports);
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        for report in reports.iter().filter(|r| !r.is_ok()) {
            for failure in &report.failures {
                eprintln!("{}: {failure}", report.label);
            }
        }
        anyhow::bail!("{failed} of {} target(s) failed", reports.len());
    }

    Ok(())
}

fn print_reports(content: &ContentRoot, reports: &[TargetReport]) {
    println!(
        "Installing {} file(s) from: {}",
        content.file_count(),
        content.root().display()
    );

    for report in reports {
        println!("\n{}", report.label);
        for file in &report.written {
            if file.replaced {
                println!("  updated: {}", file.rel.display());
            } else {
                println!("  created: {}", file.rel.display());
            }
        }
        for failure in &report.failures {
            println!("  failed:  {failure}");
        }
    }

    let ok = reports.iter().filter(|r| r.is_ok()).count();
    println!("\n{ok} of {} target(s) synchronized.", reports.len());
}
