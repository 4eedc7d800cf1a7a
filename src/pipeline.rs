//! Per-file transform and the single-pass run over a directory tree.

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use image::RgbaImage;

use crate::{
    ImgHeaderResult, PathMatcher,
    compose::{
        encode::{encode, format_tag, output_path},
        raster::{compose, load_raster},
    },
    scan::walk::walk_dir,
};

/// Inputs for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Regex matched in full against root-relative `/`-joined paths.
    pub pattern: String,
    /// Image placed on top of every matched file.
    pub header_path: PathBuf,
    /// Directory to walk.
    pub root: PathBuf,
}

/// Counters reported at the end of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStats {
    /// Files whose composite was written.
    pub transformed: usize,
    /// Wall-clock time spent walking and transforming.
    pub elapsed: Duration,
}

impl RunStats {
    /// One-line summary, e.g. `Transformed 2 images in 0.03s`.
    pub fn summary(&self) -> String {
        format!(
            "Transformed {} images in {:.2}s",
            self.transformed,
            self.elapsed.as_secs_f64()
        )
    }
}

/// What happened to a single matched file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformOutcome {
    /// Composite written to this path.
    Written(PathBuf),
    /// The output extension does not name a writable format; nothing was written.
    UnsupportedFormat(String),
}

/// Decode `input`, put `header` on top and write the result next to it.
#[tracing::instrument(skip(header), fields(input = %input.display()))]
pub fn transform_file(header: &RgbaImage, input: &Path) -> ImgHeaderResult<TransformOutcome> {
    let target = load_raster(input)?;
    let composite = compose(header, &target);

    let dest = output_path(input);
    let tag = format_tag(&dest);
    if encode(&composite, &tag, &dest)? {
        Ok(TransformOutcome::Written(dest))
    } else {
        Ok(TransformOutcome::UnsupportedFormat(tag))
    }
}

/// Compile the pattern, load the header, then transform every matching file under `config.root`.
///
/// Pattern and header failures abort before any traversal. Per-file failures are
/// reported on stderr and skipped. A directory that cannot be listed aborts the run.
pub fn run(config: &RunConfig) -> ImgHeaderResult<RunStats> {
    let matcher = PathMatcher::new(&config.pattern)?;
    let header = load_raster(&config.header_path)?;
    tracing::info!(
        pattern = matcher.as_str(),
        header = %config.header_path.display(),
        width = header.width(),
        height = header.height(),
        "header loaded"
    );

    let start = Instant::now();
    let mut transformed = 0usize;

    walk_dir(&config.root, |rel, path| {
        if !matcher.matches(rel) {
            tracing::trace!(rel, "skipped");
            return;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| rel.to_owned());
        println!("Transforming {name}");

        match transform_file(&header, path) {
            Ok(TransformOutcome::Written(dest)) => {
                transformed += 1;
                tracing::debug!(rel, dest = %dest.display(), "transformed");
            }
            Ok(TransformOutcome::UnsupportedFormat(tag)) => {
                eprintln!("Unsupported output format \"{tag}\" for image \"{name}\", skipping");
                tracing::warn!(rel, tag = %tag, "unsupported output format");
            }
            Err(e) => {
                eprintln!("Error transforming image \"{name}\": {e}");
                tracing::warn!(rel, error = %e, "transform failed");
            }
        }
    })?;

    Ok(RunStats {
        transformed,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
