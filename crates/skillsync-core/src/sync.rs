use crate::io;
use crate::report::{SyncFailure, TargetReport, WrittenFile};
use crate::source::ContentRoot;
use crate::target::Target;
use std::collections::HashSet;
use std::path::PathBuf;

/// Mirror the content root into every target, one target at a time.
///
/// Targets are fully independent: a failure at one is recorded in its report
/// and the remaining targets still run. The returned reports are in the same
/// order as `targets`.
pub fn sync(source: &ContentRoot, targets: &[Target]) -> Vec<TargetReport> {
    targets
        .iter()
        .map(|target| sync_target(source, target))
        .collect()
}

fn sync_target(source: &ContentRoot, target: &Target) -> TargetReport {
    let mut report = TargetReport::new(target);

    if let Err(e) = io::ensure_dir(&target.root) {
        report
            .failures
            .push(SyncFailure::path_creation(target.root.clone(), e));
        return report;
    }

    // Directories that failed to materialize. Files beneath them are skipped
    // instead of piling one copy error per file onto the same root cause.
    let mut dead_dirs: HashSet<PathBuf> = HashSet::new();

    for file in source.files() {
        let dst = target.root.join(&file.rel);
        let parent = dst
            .parent()
            .expect("destination path always has a parent directory")
            .to_path_buf();

        if dead_dirs.iter().any(|dead| parent.starts_with(dead)) {
            continue;
        }

        if let Err(e) = io::ensure_dir(&parent) {
            report
                .failures
                .push(SyncFailure::path_creation(parent.clone(), e));
            dead_dirs.insert(parent);
            continue;
        }

        match io::copy_file(&file.abs, &dst) {
            Ok(replaced) => report.written.push(WrittenFile {
                rel: file.rel.clone(),
                replaced,
            }),
            Err(e) => report
                .failures
                .push(SyncFailure::copy(file.abs.clone(), dst, e)),
        }
    }

    report
}
