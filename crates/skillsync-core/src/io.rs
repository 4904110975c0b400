use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copy `src` to `dst` atomically using a tempfile in the destination
/// directory, carrying the source file's permissions along. An interrupted
/// copy never leaves a half-written file at `dst`.
///
/// The destination's parent directory must already exist. Returns `true` if a
/// file existed at `dst` before the copy (it was overwritten).
pub fn copy_file(src: &Path, dst: &Path) -> Result<bool> {
    let replaced = dst.is_file();
    let data = fs::read(src)?;
    let dir = dst.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&data)?;
    tmp.as_file().set_permissions(fs::metadata(src)?.permissions())?;
    tmp.persist(dst).map_err(|e| e.error)?;
    Ok(replaced)
}
