use crate::output;
use crate::source::resolve_source;
use anyhow::Context;
use serde::Serialize;
use skillsync_core::ContentRoot;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct ListEntry {
    rel: PathBuf,
    size: u64,
}

#[derive(Serialize)]
struct Listing {
    source: PathBuf,
    files: Vec<ListEntry>,
}

pub fn run(source: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let source_path = resolve_source(source);
    let content = ContentRoot::open(&source_path)
        .with_context(|| format!("cannot open content root {}", source_path.display()))?;

    let mut files = Vec::new();
    for file in content.files() {
        let size = std::fs::metadata(&file.abs)
            .with_context(|| format!("cannot stat {}", file.abs.display()))?
            .len();
        files.push(ListEntry {
            rel: file.rel.clone(),
            size,
        });
    }

    if json {
        return output::print_json(&Listing {
            source: content.root().to_path_buf(),
            files,
        });
    }

    println!("Content root: {}", content.root().display());
    for entry in &files {
        println!(
            "  {}  ({})",
            entry.rel.display(),
            output::format_size(entry.size)
        );
    }
    println!("\n{} file(s).", files.len());

    Ok(())
}
