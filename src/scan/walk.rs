use std::{fs, path::Path};

use crate::{ImgHeaderError, ImgHeaderResult};

/// Depth-first walk over every non-directory entry below `root`.
///
/// `on_file` receives the root-relative path (`/`-joined, starting with `/`) and the
/// entry's filesystem path. Each directory is listed in full before any of its
/// entries is visited, so files the callback creates next to the current file are
/// not picked up by the same walk. Entry order follows the filesystem and is not
/// sorted.
///
/// Only listing failures abort the walk; the callback owns its own errors.
/// Symlinks are followed and cycles are not detected.
#[tracing::instrument(skip(on_file), fields(root = %root.display()))]
pub fn walk_dir<F>(root: &Path, mut on_file: F) -> ImgHeaderResult<()>
where
    F: FnMut(&str, &Path),
{
    if !root.is_dir() {
        return Err(ImgHeaderError::NotADirectory(root.to_path_buf()));
    }
    walk_inner(root, "", &mut on_file)
}

fn walk_inner<F>(dir: &Path, rel: &str, on_file: &mut F) -> ImgHeaderResult<()>
where
    F: FnMut(&str, &Path),
{
    let entries = fs::read_dir(dir)
        .and_then(|it| it.collect::<Result<Vec<_>, _>>())
        .map_err(|e| ImgHeaderError::io(dir, e))?;
    tracing::trace!(dir = %dir.display(), entries = entries.len(), "listed directory");

    for entry in entries {
        let path = entry.path();
        let next = format!("{rel}/{}", entry.file_name().to_string_lossy());
        if path.is_dir() {
            walk_inner(&path, &next, on_file)?;
        } else {
            on_file(&next, &path);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scan/walk.rs"]
mod tests;
