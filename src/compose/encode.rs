use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::{ImgHeaderError, ImgHeaderResult};

/// Prefix given to every generated file name.
pub const OUTPUT_PREFIX: &str = "output_";

/// Sibling path that receives the composite for `input`: `dir/name` becomes `dir/output_name`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(OUTPUT_PREFIX);
    if let Some(file_name) = input.file_name() {
        name.push(file_name);
    }
    input.with_file_name(name)
}

/// Text after the last `.` of the file name, or `""` when there is none.
pub fn format_tag(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(i) => name[i + 1..].to_owned(),
        None => String::new(),
    }
}

/// Resolve a format tag to an encodable [`ImageFormat`].
///
/// Tags are case-sensitive names: `png` and `PNG` resolve, `Png` does not.
pub fn resolve_format(tag: &str) -> Option<ImageFormat> {
    if tag.is_empty() {
        return None;
    }
    let single_case = tag == tag.to_ascii_lowercase() || tag == tag.to_ascii_uppercase();
    if !single_case {
        return None;
    }
    ImageFormat::from_extension(tag).filter(|f| f.writing_enabled())
}

/// Encode `raster` as `tag` into `dest`.
///
/// Returns `Ok(false)` without touching the filesystem when `tag` does not name a
/// writable format. Encoder failures after that point are errors.
#[tracing::instrument(skip(raster), fields(dest = %dest.display()))]
pub fn encode(raster: &RgbaImage, tag: &str, dest: &Path) -> ImgHeaderResult<bool> {
    let Some(format) = resolve_format(tag) else {
        return Ok(false);
    };

    fit_color_type(raster, format)
        .save_with_format(dest, format)
        .map_err(|e| ImgHeaderError::encode(dest, e))?;
    Ok(true)
}

/// Convert to a color type the target encoder accepts.
fn fit_color_type(raster: &RgbaImage, format: ImageFormat) -> DynamicImage {
    let img = DynamicImage::ImageRgba8(raster.clone());
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(img.to_rgba16()),
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(img.to_rgb32f()),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(img.to_rgba32f()),
        _ => img,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/encode.rs"]
mod tests;
