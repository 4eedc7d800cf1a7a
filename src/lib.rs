//! imgheader puts a header image on top of every matching image in a directory tree.
//!
//! A run is a single pass:
//!
//! 1. **Match**: [`PathMatcher`] tests each root-relative path (`/sub/a.png`) against a regex, in full.
//! 2. **Walk**: [`walk_dir`] visits every file under the root, depth-first.
//! 3. **Compose**: [`compose`] stacks the header above the decoded target.
//! 4. **Encode**: [`encode`] writes `output_<name>` next to the input, in the format its extension names.
//!
//! [`run`] ties the steps together and returns [`RunStats`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod foundation;
mod logging;
mod pipeline;
mod scan;

pub use compose::encode::{OUTPUT_PREFIX, encode, format_tag, output_path, resolve_format};
pub use compose::raster::{compose, load_raster};
pub use foundation::error::{ImgHeaderError, ImgHeaderResult};
pub use logging::{init_logging, level_for_verbosity};
pub use pipeline::{RunConfig, RunStats, TransformOutcome, run, transform_file};
pub use scan::matcher::PathMatcher;
pub use scan::walk::walk_dir;
